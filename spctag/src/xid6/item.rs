use super::field::{DataType, OST_TRACK, Xid6Field, describe, field_info};
use crate::error::{ErrorKind, Result, SpcTagError};
use crate::macros::oversized_err;
use crate::util::text::{decode_padded, latin1_encode};

use byteorder::{ByteOrder, LittleEndian};

// Values of the header's type byte, as written by this crate. Readers only care about zero/non-zero.
pub(crate) const KIND_INLINE: u8 = 0;
pub(crate) const KIND_TEXT: u8 = 1;
pub(crate) const KIND_DATA: u8 = 4;

pub(crate) const SUB_CHUNK_HEADER_SIZE: usize = 4;

/// The 4-byte header of an extended tag sub-chunk
///
/// ```text
/// +----+------+-------+-------+
/// | id | type | value (i16 LE)|
/// +----+------+-------+-------+
/// ```
///
/// A zero `type` means `value` *is* the data. Otherwise `value` is the length of the data block
/// following the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubChunkHeader {
	pub(crate) id: u8,
	pub(crate) kind: u8,
	pub(crate) value: i16,
}

impl SubChunkHeader {
	pub(crate) fn parse(bytes: [u8; SUB_CHUNK_HEADER_SIZE]) -> Self {
		Self {
			id: bytes[0],
			kind: bytes[1],
			value: LittleEndian::read_i16(&bytes[2..]),
		}
	}

	pub(crate) fn as_bytes(self) -> [u8; SUB_CHUNK_HEADER_SIZE] {
		let [low, high] = self.value.to_le_bytes();
		[self.id, self.kind, low, high]
	}

	/// The field ID
	pub fn id(&self) -> u8 {
		self.id
	}

	/// The raw type byte
	pub fn kind(&self) -> u8 {
		self.kind
	}

	/// Whether a data block follows the header, rather than the value being inlined in it
	pub fn has_data(&self) -> bool {
		self.kind != KIND_INLINE
	}

	/// The inline value, or the length of the data block
	pub fn value(&self) -> i16 {
		self.value
	}

	/// The raw bytes of [`SubChunkHeader::value`]
	pub fn value_bytes(&self) -> [u8; 2] {
		self.value.to_le_bytes()
	}
}

/// The value of an OST track field
///
/// Stored as a 16-bit value, with the track number in the upper byte and an optional
/// ASCII character (e.g. `12b`) in the lower byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Track {
	/// The track number, 0-99
	pub number: u8,
	/// An optional printable ASCII character
	pub suffix: Option<char>,
}

impl Track {
	/// Decode a `Track` from its 16-bit form
	///
	/// A lower byte outside of printable ASCII (`0x20..=0x7E`) means there is no suffix.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::Track;
	///
	/// let track = Track::from_raw(0x4D41);
	/// assert_eq!(track.number, 77);
	/// assert_eq!(track.suffix, Some('A'));
	///
	/// let track = Track::from_raw(0x0501);
	/// assert_eq!(track.number, 5);
	/// assert_eq!(track.suffix, None);
	/// ```
	pub fn from_raw(raw: u16) -> Self {
		let [suffix, number] = raw.to_le_bytes();
		Self {
			number,
			suffix: (0x20..=0x7E).contains(&suffix).then_some(char::from(suffix)),
		}
	}

	/// Encode the `Track` to its 16-bit form
	///
	/// # Errors
	///
	/// The suffix is not printable ASCII
	pub fn to_raw(self) -> Result<u16> {
		let suffix = match self.suffix {
			None => 0,
			Some(c @ ' '..='~') => c as u8,
			Some(_) => {
				return Err(SpcTagError::new(ErrorKind::InvalidFieldValue {
					field: describe(OST_TRACK),
					reason: "track suffix must be a printable ASCII character",
				}));
			},
		};

		Ok(u16::from_le_bytes([suffix, self.number]))
	}
}

/// The value of a [`DataType::RawData`] field
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ItemData {
	/// A 16-bit value stored in the sub-chunk header
	Inline(u16),
	/// A data block following the sub-chunk header, without its alignment padding
	Block(Vec<u8>),
}

impl ItemData {
	/// View the data as an unsigned integer
	///
	/// Blocks are read as little-endian, and only the first 4 bytes are considered.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::ItemData;
	///
	/// assert_eq!(ItemData::Inline(1997).as_u32(), 1997);
	/// assert_eq!(ItemData::Block(vec![0x00, 0x00, 0x01, 0x00]).as_u32(), 0x10000);
	/// assert_eq!(ItemData::Block(vec![0xFF]).as_u32(), 0xFF);
	/// ```
	pub fn as_u32(&self) -> u32 {
		match self {
			Self::Inline(value) => u32::from(*value),
			Self::Block(block) => read_le_u32(block),
		}
	}
}

/// The interpreted value of a sub-chunk
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Xid6Value {
	/// A [`DataType::Text`] field
	Text(String),
	/// A [`DataType::Integer`] field
	Integer(i32),
	/// A [`DataType::RawData`] field, or a field with an unknown ID
	Data(ItemData),
	/// The OST track field
	Track(Track),
}

impl Xid6Value {
	fn interpret(header: SubChunkHeader, data: Option<&[u8]>) -> Self {
		let data_type = field_info(header.id).map(|field| field.data_type);

		match (data_type, data) {
			(Some(DataType::Text), Some(data)) => Self::Text(decode_padded(data)),
			(Some(DataType::Text), None) => Self::Text(header.value.to_string()),
			(Some(DataType::Integer), Some(data)) => Self::Integer(read_le_u32(data) as i32),
			(Some(DataType::Integer), None) => Self::Integer(i32::from(header.value)),
			(Some(DataType::RawData), _) if header.id == OST_TRACK => {
				let raw = match data {
					Some(data) => read_le_u32(data) as u16,
					None => header.value as u16,
				};

				Self::Track(Track::from_raw(raw))
			},
			(_, Some(data)) => Self::Data(ItemData::Block(data.to_vec())),
			(_, None) => Self::Data(ItemData::Inline(header.value as u16)),
		}
	}

	pub(crate) fn into_text(self) -> Option<String> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	pub(crate) fn into_integer(self) -> Option<i32> {
		match self {
			Self::Integer(integer) => Some(integer),
			_ => None,
		}
	}

	pub(crate) fn into_data(self) -> Option<ItemData> {
		match self {
			Self::Data(data) => Some(data),
			_ => None,
		}
	}

	pub(crate) fn into_track(self) -> Option<Track> {
		match self {
			Self::Track(track) => Some(track),
			_ => None,
		}
	}
}

/// A single sub-chunk of an extended tag
///
/// This keeps the header and data exactly as read, alongside their interpretation, so items
/// with unknown IDs can be written back untouched.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Xid6Item {
	pub(crate) header: SubChunkHeader,
	pub(crate) data: Option<Vec<u8>>,
	pub(crate) value: Xid6Value,
}

impl Xid6Item {
	pub(crate) fn from_parts(header: SubChunkHeader, data: Option<Vec<u8>>) -> Self {
		let value = Xid6Value::interpret(header, data.as_deref());
		Self {
			header,
			data,
			value,
		}
	}

	/// Create an item with its value stored in the header
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::{ItemData, Xid6Item, Xid6Value};
	///
	/// let item = Xid6Item::new_inline(0x40, 12);
	/// assert!(!item.header().has_data());
	/// assert_eq!(item.value(), &Xid6Value::Data(ItemData::Inline(12)));
	/// ```
	pub fn new_inline(id: u8, value: i16) -> Self {
		Self::from_parts(
			SubChunkHeader {
				id,
				kind: KIND_INLINE,
				value,
			},
			None,
		)
	}

	/// Create an item with a data block
	///
	/// # Errors
	///
	/// `data` is longer than `i16::MAX` bytes
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::{Xid6Item, Xid6Value};
	///
	/// # fn main() -> spctag::error::Result<()> {
	/// let item = Xid6Item::new_with_data(0x13, b"Nintendo\0".to_vec())?;
	/// assert_eq!(item.header().value(), 9);
	/// assert_eq!(item.value(), &Xid6Value::Text(String::from("Nintendo")));
	/// # Ok(()) }
	/// ```
	pub fn new_with_data(id: u8, data: Vec<u8>) -> Result<Self> {
		let Ok(len) = i16::try_from(data.len()) else {
			oversized_err!(@BAIL describe(id), i16::MAX as usize, data.len());
		};

		let kind = match field_info(id) {
			Some(Xid6Field {
				data_type: DataType::Text,
				..
			}) => KIND_TEXT,
			_ => KIND_DATA,
		};

		Ok(Self::from_parts(
			SubChunkHeader {
				id,
				kind,
				value: len,
			},
			Some(data),
		))
	}

	/// Encode a value as an item
	///
	/// Integers that fit in 16 bits, raw inline data, and tracks are stored in the header.
	/// Text is always NUL terminated and stored in a data block.
	pub(crate) fn from_value(id: u8, value: Xid6Value, lossy: bool) -> Result<Self> {
		match value {
			Xid6Value::Text(text) => {
				let mut data =
					latin1_encode(&text, lossy).collect::<std::result::Result<Vec<u8>, _>>()?;
				data.push(0);

				Self::new_with_data(id, data)
			},
			Xid6Value::Integer(integer) => match i16::try_from(integer) {
				Ok(inline) => Ok(Self::new_inline(id, inline)),
				Err(_) => Self::new_with_data(id, integer.to_le_bytes().to_vec()),
			},
			Xid6Value::Data(ItemData::Inline(inline)) => Ok(Self::new_inline(id, inline as i16)),
			Xid6Value::Data(ItemData::Block(block)) => Self::new_with_data(id, block),
			Xid6Value::Track(track) => Ok(Self::new_inline(id, track.to_raw()? as i16)),
		}
	}

	/// The field ID
	pub fn id(&self) -> u8 {
		self.header.id
	}

	/// The sub-chunk header
	pub fn header(&self) -> &SubChunkHeader {
		&self.header
	}

	/// The data block, if one follows the header
	pub fn data(&self) -> Option<&[u8]> {
		self.data.as_deref()
	}

	/// The interpreted value
	pub fn value(&self) -> &Xid6Value {
		&self.value
	}

	/// Consume the item, returning its interpreted value
	pub fn into_value(self) -> Xid6Value {
		self.value
	}

	/// The description of the field, or `"Unknown"`
	pub fn description(&self) -> &'static str {
		describe(self.header.id)
	}

	/// The data type of the field, if it is registered
	pub fn data_type(&self) -> Option<DataType> {
		field_info(self.header.id).map(|field| field.data_type)
	}

	/// The number of bytes the item occupies in the chunk, including alignment padding
	pub(crate) fn encoded_size(&self) -> usize {
		SUB_CHUNK_HEADER_SIZE + self.data.as_ref().map_or(0, |data| data.len().next_multiple_of(4))
	}
}

// Little-endian, zero extended when shorter than 4 bytes
fn read_le_u32(bytes: &[u8]) -> u32 {
	let mut buf = [0; 4];
	let len = bytes.len().min(4);
	buf[..len].copy_from_slice(&bytes[..len]);
	u32::from_le_bytes(buf)
}
