use super::ID666_END;
use super::layout::{FieldSpan, Layout};
use super::tag::{Emulator, Id666Tag};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::util::text::decode_padded;

use byteorder::{ByteOrder, LittleEndian};

impl Id666Tag {
	/// Parse a base tag from the start of an SPC file with a known [`Layout`]
	///
	/// `region` holds the file's first bytes, so fields are found at their absolute offsets.
	/// Use [`Id666Tag::read_from`] to detect the layout as well.
	///
	/// # Errors
	///
	/// * A text encoded number is invalid, with [`ParsingMode::Strict`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	/// use spctag::id666::{Id666Tag, Layout};
	///
	/// # fn main() -> spctag::error::Result<()> {
	/// let mut region = [0; 0xD3];
	/// region[0x2E..0x33].copy_from_slice(b"Title");
	/// region[0xA9..0xAC].copy_from_slice(b"120");
	///
	/// let tag = Id666Tag::parse(&region, Layout::Text, ParseOptions::new())?;
	/// assert_eq!(tag.title, "Title");
	/// assert_eq!(tag.length_before_fadeout, 120);
	/// # Ok(()) }
	/// ```
	pub fn parse(
		region: &[u8; ID666_END],
		layout: Layout,
		parse_options: ParseOptions,
	) -> Result<Self> {
		let fields = layout.fields();
		let field = move |span: FieldSpan| &region[span.range()];

		let mut tag = Self {
			layout,
			title: decode_padded(field(fields.title)),
			game: decode_padded(field(fields.game)),
			dumper: decode_padded(field(fields.dumper)),
			comments: decode_padded(field(fields.comments)),
			date: decode_padded(field(fields.date)),
			artist: decode_padded(field(fields.artist)),
			// Always binary
			muted_channels: region[fields.muted_channels.offset],
			..Self::default()
		};

		let length_bytes = field(fields.song_length);
		let fadeout_bytes = field(fields.fade_length);
		let emulator_byte = region[fields.emulator.offset];

		match layout {
			Layout::Binary => {
				// The song length is only 3 bytes wide
				tag.length_before_fadeout = LittleEndian::read_u24(length_bytes);
				tag.fadeout_length = LittleEndian::read_u32(fadeout_bytes);
				tag.emulator = Emulator::from_code(&(emulator_byte as i8).to_string());
			},
			Layout::Text => {
				let parse_mode = parse_options.parsing_mode;
				tag.length_before_fadeout = parse_number(length_bytes, parse_mode)?;
				tag.fadeout_length = parse_number(fadeout_bytes, parse_mode)?;
				tag.emulator = Emulator::from_code(&emulator_token(emulator_byte));
			},
		}

		Ok(tag)
	}
}

// A single character token. Only padding is dropped, any other byte is kept as an unknown code.
fn emulator_token(byte: u8) -> String {
	match byte {
		b'\0' | b' ' | b'\t' | b'\r' | b'\n' => String::new(),
		_ => char::from(byte).to_string(),
	}
}

fn parse_number(bytes: &[u8], parse_mode: ParsingMode) -> Result<u32> {
	let text = decode_padded(bytes);
	if text.is_empty() {
		return Ok(0);
	}

	match text.parse::<u32>() {
		Ok(number) => Ok(number),
		Err(_) => {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(TextDecode("Base tag number contains non-digit characters")),
				DEFAULT: {
					log::warn!("Base tag number {text:?} is invalid, defaulting to 0");
					Ok(0)
				}
			)
		},
	}
}
