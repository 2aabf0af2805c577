/// How the contents of a sub-chunk are interpreted
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DataType {
	/// Latin-1 text, stored in a trailing data block
	Text,
	/// A signed integer, either inline (16-bit) or in a 4-byte data block
	Integer,
	/// Anything else, kept as an inline 16-bit value or a raw data block
	RawData,
}

/// A registered extended tag field
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Xid6Field {
	/// The one byte identifier of the sub-chunk
	pub id: u8,
	/// How the sub-chunk's contents are interpreted
	pub data_type: DataType,
	/// A human readable description
	pub description: &'static str,
}

impl Xid6Field {
	const fn new(id: u8, data_type: DataType, description: &'static str) -> Self {
		Self {
			id,
			data_type,
			description,
		}
	}
}

pub(crate) const SONG_NAME: u8 = 0x01;
pub(crate) const GAME_NAME: u8 = 0x02;
pub(crate) const ARTIST_NAME: u8 = 0x03;
pub(crate) const DUMPER_NAME: u8 = 0x04;
pub(crate) const DUMP_DATE: u8 = 0x05;
pub(crate) const EMULATOR: u8 = 0x06;
pub(crate) const COMMENTS: u8 = 0x07;
pub(crate) const OST_TITLE: u8 = 0x10;
pub(crate) const OST_DISC: u8 = 0x11;
pub(crate) const OST_TRACK: u8 = 0x12;
pub(crate) const PUBLISHER_NAME: u8 = 0x13;
pub(crate) const COPYRIGHT_YEAR: u8 = 0x14;
pub(crate) const INTRO_LENGTH: u8 = 0x30;
pub(crate) const LOOP_LENGTH: u8 = 0x31;
pub(crate) const END_LENGTH: u8 = 0x32;
pub(crate) const FADE_LENGTH: u8 = 0x33;
pub(crate) const MUTED_VOICES: u8 = 0x34;
pub(crate) const LOOP_COUNT: u8 = 0x35;
pub(crate) const MIXING_LEVEL: u8 = 0x36;

/// Every field known to the extended tag, sorted by ID
pub static XID6_FIELDS: [Xid6Field; 19] = [
	Xid6Field::new(SONG_NAME, DataType::Text, "Song Name"),
	Xid6Field::new(GAME_NAME, DataType::Text, "Game Name"),
	Xid6Field::new(ARTIST_NAME, DataType::Text, "Artist's Name"),
	Xid6Field::new(DUMPER_NAME, DataType::Text, "Dumper's Name"),
	Xid6Field::new(
		DUMP_DATE,
		DataType::Integer,
		"Date Song was Dumped (stored as YYYYMMDD)",
	),
	Xid6Field::new(EMULATOR, DataType::RawData, "Emulator Used"),
	Xid6Field::new(COMMENTS, DataType::Text, "Comments"),
	Xid6Field::new(OST_TITLE, DataType::Text, "Official Soundtrack Title"),
	Xid6Field::new(OST_DISC, DataType::RawData, "OST Disc"),
	Xid6Field::new(
		OST_TRACK,
		DataType::RawData,
		"OST Track (upper byte is the number 0-99, lower byte is an optional ASCII character)",
	),
	Xid6Field::new(PUBLISHER_NAME, DataType::Text, "Publisher's Name"),
	Xid6Field::new(COPYRIGHT_YEAR, DataType::RawData, "Copyright Year"),
	Xid6Field::new(
		INTRO_LENGTH,
		DataType::Integer,
		"Introduction Length (lengths are stored in 1/64000th seconds)",
	),
	Xid6Field::new(LOOP_LENGTH, DataType::Integer, "Loop Length"),
	Xid6Field::new(END_LENGTH, DataType::Integer, "End Length"),
	Xid6Field::new(FADE_LENGTH, DataType::Integer, "Fade Length"),
	Xid6Field::new(
		MUTED_VOICES,
		DataType::RawData,
		"Muted Voices (a bit is set for each voice that's muted)",
	),
	Xid6Field::new(LOOP_COUNT, DataType::RawData, "Number of Times to Loop"),
	Xid6Field::new(MIXING_LEVEL, DataType::RawData, "Mixing (Preamp) Level"),
];

/// Look up a registered field by ID
///
/// # Examples
///
/// ```rust
/// use spctag::xid6::{DataType, field_info};
///
/// let field = field_info(0x13).unwrap();
/// assert_eq!(field.data_type, DataType::Text);
/// assert_eq!(field.description, "Publisher's Name");
///
/// assert!(field_info(0x08).is_none());
/// ```
pub fn field_info(id: u8) -> Option<&'static Xid6Field> {
	XID6_FIELDS
		.binary_search_by_key(&id, |field| field.id)
		.ok()
		.map(|index| &XID6_FIELDS[index])
}

/// Get the description of a field, or `"Unknown"` for unregistered IDs
pub fn describe(id: u8) -> &'static str {
	field_info(id).map_or("Unknown", |field| field.description)
}
