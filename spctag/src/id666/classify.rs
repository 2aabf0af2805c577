/// The kind of data found in a fixed-width span of the base tag
///
/// See [`classify`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpanKind {
	/// Every byte is `0x00`
	Empty,
	/// Every byte is an ASCII digit, `/`, or `0x00`
	Text,
	/// Anything else
	Binary,
}

/// Classify a span of bytes as empty, textual, or binary
///
/// This is the building block of the layout detection, it makes no decisions on its own.
///
/// # Examples
///
/// ```rust
/// use spctag::id666::{SpanKind, classify};
///
/// assert_eq!(classify(&[0, 0, 0]), SpanKind::Empty);
/// assert_eq!(classify(b"180"), SpanKind::Text);
/// assert_eq!(classify(b"12/25/1997\0"), SpanKind::Text);
/// assert_eq!(classify(&[0xB4, 0, 0]), SpanKind::Binary);
/// ```
pub fn classify(bytes: &[u8]) -> SpanKind {
	if bytes.iter().all(|b| *b == 0) {
		return SpanKind::Empty;
	}

	if bytes
		.iter()
		.all(|b| b.is_ascii_digit() || *b == b'/' || *b == 0)
	{
		return SpanKind::Text;
	}

	SpanKind::Binary
}
