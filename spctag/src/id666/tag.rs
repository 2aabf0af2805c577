use super::layout::Layout;
use super::read_region;
use crate::config::{ParseOptions, WriteOptions};
use crate::error::Result;

use std::borrow::Cow;
use std::io::{Read, Seek, Write};

const EMULATOR_NAMES: [&str; 7] = [
	"unknown", "ZSNES", "Snes9x", "ZST2SPC", "ETC", "SNEShout", "ZSNESW",
];

/// The emulator used to dump an SPC file
///
/// The base tag stores this as a single token, a digit in the range `0..=6` for the known emulators.
/// Anything else is kept as-is in [`Emulator::Other`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Emulator {
	/// Code `0`, or an empty field
	#[default]
	Unknown,
	/// Code `1`
	Zsnes,
	/// Code `2`
	Snes9x,
	/// Code `3`
	Zst2Spc,
	/// Code `4`
	Etc,
	/// Code `5`
	SnesHout,
	/// Code `6`
	ZsnesW,
	/// An unrecognized code, holding the raw token
	Other(String),
}

impl Emulator {
	/// Get an `Emulator` from its code
	///
	/// An empty code is [`Emulator::Unknown`].
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Emulator;
	///
	/// assert_eq!(Emulator::from_code(""), Emulator::Unknown);
	/// assert_eq!(Emulator::from_code("2"), Emulator::Snes9x);
	/// assert_eq!(Emulator::from_code("7"), Emulator::Other(String::from("7")));
	/// ```
	pub fn from_code(code: &str) -> Self {
		match code {
			"" | "0" => Self::Unknown,
			"1" => Self::Zsnes,
			"2" => Self::Snes9x,
			"3" => Self::Zst2Spc,
			"4" => Self::Etc,
			"5" => Self::SnesHout,
			"6" => Self::ZsnesW,
			_ => Self::Other(code.to_owned()),
		}
	}

	/// The code of the emulator
	///
	/// For [`Emulator::Other`], this is the raw token.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Emulator;
	///
	/// assert_eq!(Emulator::Unknown.code(), "0");
	/// assert_eq!(Emulator::Zsnes.code(), "1");
	/// ```
	pub fn code(&self) -> Cow<'_, str> {
		if let Self::Other(token) = self {
			return Cow::Borrowed(token.as_str());
		}

		Cow::Owned(self.index().unwrap_or_default().to_string())
	}

	/// The display name of the emulator
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Emulator;
	///
	/// assert_eq!(Emulator::SnesHout.name(), "SNEShout");
	/// assert_eq!(Emulator::from_code("X").name(), "other");
	/// ```
	pub fn name(&self) -> &'static str {
		match self.index() {
			Some(index) => EMULATOR_NAMES[index],
			None => "other",
		}
	}

	/// Whether this is an unrecognized code
	pub fn is_other(&self) -> bool {
		matches!(self, Self::Other(_))
	}

	fn index(&self) -> Option<usize> {
		let index = match self {
			Self::Unknown => 0,
			Self::Zsnes => 1,
			Self::Snes9x => 2,
			Self::Zst2Spc => 3,
			Self::Etc => 4,
			Self::SnesHout => 5,
			Self::ZsnesW => 6,
			Self::Other(_) => return None,
		};

		Some(index)
	}
}

/// The base tag of an SPC file
///
/// All of the text fields are Latin-1, and have a fixed maximum size. Attempting to write
/// a field greater than the maximum size **will** error, it will not be shrunk.
///
/// The [`Layout`] decides how the numeric fields (and the date) are stored. It is detected
/// when reading, and can be changed freely before writing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Id666Tag {
	/// The encoding of the tag
	pub layout: Layout,
	/// Song title, 32 bytes max
	pub title: String,
	/// Game title, 32 bytes max
	pub game: String,
	/// Name of the dumper, 16 bytes max
	pub dumper: String,
	/// Comments, 32 bytes max
	pub comments: String,
	/// The date the song was dumped
	///
	/// This is always kept as text, even in [`Layout::Binary`], where it is limited to 4 bytes.
	/// The text layout allows 11 bytes.
	pub date: String,
	/// The length of the song before fading out
	///
	/// 3 bytes (binary) or 3 digits (text) max.
	pub length_before_fadeout: u32,
	/// The length of the fade
	///
	/// 4 bytes (binary) or 5 digits (text) max.
	pub fadeout_length: u32,
	/// Song artist, 32 bytes max
	pub artist: String,
	/// The default channel disables, a bit is set for each muted channel
	pub muted_channels: u8,
	/// The emulator used to dump the file
	pub emulator: Emulator,
}

impl Id666Tag {
	/// Create a new empty `Id666Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Id666Tag;
	///
	/// let id666_tag = Id666Tag::new();
	/// assert!(id666_tag.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the tag is binary encoded
	pub fn is_binary(&self) -> bool {
		self.layout.is_binary()
	}

	/// Whether every field holds its default value
	///
	/// The layout is not considered.
	pub fn is_empty(&self) -> bool {
		self.title.is_empty()
			&& self.game.is_empty()
			&& self.dumper.is_empty()
			&& self.comments.is_empty()
			&& self.date.is_empty()
			&& self.length_before_fadeout == 0
			&& self.fadeout_length == 0
			&& self.artist.is_empty()
			&& self.muted_channels == 0
			&& self.emulator == Emulator::Unknown
	}

	/// Read a base tag from the start of an SPC file
	///
	/// The layout is detected first (see [`detect_layout`](super::detect_layout)), and then every field
	/// is read with it.
	///
	/// # Errors
	///
	/// * `reader` is too short to contain a base tag
	/// * A text encoded number is invalid, with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)
	/// * Any other I/O error
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let region = read_region(reader)?;
		let layout = super::detect_layout(&region, parse_options.prefer_binary_on_ambiguity);

		Self::parse(&region, layout, parse_options)
	}

	/// Write the base tag to an SPC file
	///
	/// The entire tag region is rewritten, including the bytes not covered by the current [`Layout`].
	///
	/// # Errors
	///
	/// * A field is too large (see [`ErrorKind::OversizedField`](crate::error::ErrorKind::OversizedField))
	/// * A field can't be encoded in the current layout
	/// * A text field isn't Latin-1, and [`WriteOptions::lossy_text_encoding`] is disabled
	/// * Any I/O error, in which case the region may be partially written
	pub fn write_to<W>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()>
	where
		W: Write + Seek,
	{
		super::write::write_id666(writer, self, write_options)
	}
}
