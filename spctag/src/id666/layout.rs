use std::ops::Range;

/// The encoding of a base (ID666) tag
///
/// The base tag has no marker for its encoding, it can only be inferred from its contents (see
/// [`detect_layout`](super::detect_layout)). The two encodings place the same ten fields at slightly
/// different offsets, as the text encoding needs more room for its numbers.
///
/// A single `Layout` governs every field of a tag, they are never mixed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Layout {
	/// Numbers are stored as little-endian integers
	Binary,
	/// Numbers are stored as decimal strings
	#[default]
	Text,
}

impl Layout {
	/// Whether this is [`Layout::Binary`]
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Layout;
	///
	/// assert!(Layout::Binary.is_binary());
	/// assert!(!Layout::Text.is_binary());
	/// ```
	pub fn is_binary(self) -> bool {
		self == Self::Binary
	}

	pub(crate) fn fields(self) -> &'static FieldTable {
		match self {
			Self::Binary => &BINARY_FIELDS,
			Self::Text => &TEXT_FIELDS,
		}
	}
}

/// The absolute position and width of a single field
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct FieldSpan {
	pub(crate) offset: usize,
	pub(crate) len: usize,
}

impl FieldSpan {
	pub(crate) const fn new(offset: usize, len: usize) -> Self {
		Self { offset, len }
	}

	pub(crate) fn range(self) -> Range<usize> {
		self.offset..self.offset + self.len
	}
}

pub(crate) struct FieldTable {
	pub(crate) title: FieldSpan,
	pub(crate) game: FieldSpan,
	pub(crate) dumper: FieldSpan,
	pub(crate) comments: FieldSpan,
	pub(crate) date: FieldSpan,
	pub(crate) song_length: FieldSpan,
	pub(crate) fade_length: FieldSpan,
	pub(crate) artist: FieldSpan,
	pub(crate) muted_channels: FieldSpan,
	pub(crate) emulator: FieldSpan,
}

static BINARY_FIELDS: FieldTable = FieldTable {
	title: FieldSpan::new(0x2E, 32),
	game: FieldSpan::new(0x4E, 32),
	dumper: FieldSpan::new(0x6E, 16),
	comments: FieldSpan::new(0x7E, 32),
	date: FieldSpan::new(0x9E, 4),
	song_length: FieldSpan::new(0xA9, 3),
	fade_length: FieldSpan::new(0xAC, 4),
	artist: FieldSpan::new(0xB0, 32),
	muted_channels: FieldSpan::new(0xD0, 1),
	emulator: FieldSpan::new(0xD1, 1),
};

static TEXT_FIELDS: FieldTable = FieldTable {
	title: FieldSpan::new(0x2E, 32),
	game: FieldSpan::new(0x4E, 32),
	dumper: FieldSpan::new(0x6E, 16),
	comments: FieldSpan::new(0x7E, 32),
	date: FieldSpan::new(0x9E, 11),
	song_length: FieldSpan::new(0xA9, 3),
	fade_length: FieldSpan::new(0xAC, 5),
	artist: FieldSpan::new(0xB1, 32),
	muted_channels: FieldSpan::new(0xD1, 1),
	emulator: FieldSpan::new(0xD2, 1),
};
