/// Errors that can occur while encoding text
///
/// Every text field in an SPC file is Latin-1, so this only arises for characters above `U+00FF`.
#[derive(Copy, Clone, Debug)]
pub struct TextEncodingError {
	valid_up_to: usize,
}

impl TextEncodingError {
	/// The character index in the provided string up to which the encoding was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl core::fmt::Display for TextEncodingError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(
			f,
			"invalid Latin-1 sequence from index {}",
			self.valid_up_to
		)
	}
}

impl core::error::Error for TextEncodingError {}

/// Decode a fixed-width, NUL padded text field
///
/// The text ends at the first NUL. Anything after it is discarded, even non-NUL bytes, so
/// `"Foo\0Bar\0"` is `"Foo"` rather than keeping the embedded NUL. Trailing whitespace and control
/// characters are stripped.
pub(crate) fn decode_padded(bytes: &[u8]) -> String {
	let mut end = bytes.len();
	if let Some(null_pos) = bytes.iter().position(|&b| b == 0) {
		if bytes[null_pos..].iter().any(|b| *b != b'\0') {
			log::warn!("Text field contains trailing junk after its terminator, skipping");
		}

		end = null_pos;
	}

	let mut text = latin1_decode(&bytes[..end]);
	trim_end_padding(&mut text);
	text
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

pub(crate) fn latin1_encode(
	s: &str,
	lossy: bool,
) -> impl Iterator<Item = std::result::Result<u8, TextEncodingError>> {
	s.chars().enumerate().map(move |(index, c)| {
		if (c as u32) <= 255 {
			Ok(c as u8)
		} else if lossy {
			Ok(b'?')
		} else {
			Err(TextEncodingError {
				valid_up_to: index, // All characters up to this point are single-byte
			})
		}
	})
}

pub(crate) fn trim_end_padding(text: &mut String) {
	let new_len = text
		.trim_end_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control())
		.len();
	text.truncate(new_len);
}
