use super::field::{
	ARTIST_NAME, COMMENTS, COPYRIGHT_YEAR, DUMP_DATE, DUMPER_NAME, EMULATOR, END_LENGTH,
	FADE_LENGTH, GAME_NAME, INTRO_LENGTH, LOOP_COUNT, LOOP_LENGTH, MIXING_LEVEL, MUTED_VOICES,
	OST_DISC, OST_TITLE, OST_TRACK, PUBLISHER_NAME, SONG_NAME,
};
use super::item::{ItemData, Track, Xid6Item, Xid6Value};
use crate::config::{ParseOptions, WriteOptions};
use crate::error::{Result, SpcTagError};
use crate::util::io::{FileLike, Length, Truncate};

use std::fs::OpenOptions;
use std::io::{Read, Seek, Write};
use std::path::Path;

macro_rules! impl_accessor {
	(TEXT: $($name:ident => $desc:literal;)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $desc]
				pub fn $name(&self) -> Option<&str> {
					self.$name.as_deref()
				}

				#[doc = "Sets the " $desc]
				pub fn [<set_ $name>](&mut self, value: String) {
					self.$name = Some(value)
				}

				#[doc = "Removes the " $desc]
				pub fn [<remove_ $name>](&mut self) {
					self.$name = None
				}
			)+
		}
	};
	(COPY: $($name:ident: $ty:ty => $desc:literal;)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $desc]
				pub fn $name(&self) -> Option<$ty> {
					self.$name
				}

				#[doc = "Sets the " $desc]
				pub fn [<set_ $name>](&mut self, value: $ty) {
					self.$name = Some(value)
				}

				#[doc = "Removes the " $desc]
				pub fn [<remove_ $name>](&mut self) {
					self.$name = None
				}
			)+
		}
	};
	(DATA: $($name:ident => $desc:literal;)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $desc]
				pub fn $name(&self) -> Option<&ItemData> {
					self.$name.as_ref()
				}

				#[doc = "Sets the " $desc]
				pub fn [<set_ $name>](&mut self, value: ItemData) {
					self.$name = Some(value)
				}

				#[doc = "Removes the " $desc]
				pub fn [<remove_ $name>](&mut self) {
					self.$name = None
				}
			)+
		}
	};
}

/// The extended tag of an SPC file
///
/// ## Item storage
///
/// Every registered field (see [`XID6_FIELDS`](super::XID6_FIELDS)) has a dedicated accessor.
/// Lengths are in 1/64000th of a second.
///
/// Sub-chunks with an unregistered ID, and any repeat of an ID after its first occurrence, are
/// kept in order as [`unknown items`](Xid6Tag::unknown_items) and written back untouched.
///
/// ## Writing
///
/// Text is always written NUL terminated in a data block. Integers are written in the sub-chunk
/// header when they fit in 16 bits, and in a 4-byte data block otherwise.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Xid6Tag {
	title: Option<String>,
	game: Option<String>,
	artist: Option<String>,
	dumper: Option<String>,
	date: Option<i32>,
	emulator: Option<ItemData>,
	comments: Option<String>,
	official_title: Option<String>,
	disc: Option<ItemData>,
	track: Option<Track>,
	publisher: Option<String>,
	copyright_year: Option<ItemData>,
	intro_length: Option<i32>,
	loop_length: Option<i32>,
	end_length: Option<i32>,
	fade_length: Option<i32>,
	muted_channels: Option<ItemData>,
	loop_count: Option<ItemData>,
	mixing_level: Option<ItemData>,
	unknown_items: Vec<Xid6Item>,
}

impl Xid6Tag {
	/// Create a new empty `Xid6Tag`
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::Xid6Tag;
	///
	/// let xid6_tag = Xid6Tag::new();
	/// assert!(xid6_tag.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	impl_accessor!(
		TEXT:
			title => "song name";
			game => "game name";
			artist => "artist's name";
			dumper => "dumper's name";
			comments => "comments";
			official_title => "official soundtrack title";
			publisher => "publisher's name";
	);

	impl_accessor!(
		COPY:
			date: i32 => "date the song was dumped, as `YYYYMMDD`";
			track: Track => "OST track";
			intro_length: i32 => "introduction length";
			loop_length: i32 => "loop length";
			end_length: i32 => "end length";
			fade_length: i32 => "fade length";
	);

	impl_accessor!(
		DATA:
			emulator => "emulator used to dump the file";
			disc => "OST disc";
			copyright_year => "copyright year";
			muted_channels => "muted voices, a bit is set for each muted voice";
			loop_count => "number of times to loop";
			mixing_level => "mixing (preamp) level";
	);

	/// Items with an unregistered ID, or a repeated one
	pub fn unknown_items(&self) -> &[Xid6Item] {
		&self.unknown_items
	}

	/// Mutable access to the unknown items
	///
	/// These are written after every registered field, in order.
	pub fn unknown_items_mut(&mut self) -> &mut Vec<Xid6Item> {
		&mut self.unknown_items
	}

	/// Whether the tag has no items at all
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.game.is_none()
			&& self.artist.is_none()
			&& self.dumper.is_none()
			&& self.date.is_none()
			&& self.emulator.is_none()
			&& self.comments.is_none()
			&& self.official_title.is_none()
			&& self.disc.is_none()
			&& self.track.is_none()
			&& self.publisher.is_none()
			&& self.copyright_year.is_none()
			&& self.intro_length.is_none()
			&& self.loop_length.is_none()
			&& self.end_length.is_none()
			&& self.fade_length.is_none()
			&& self.muted_channels.is_none()
			&& self.loop_count.is_none()
			&& self.mixing_level.is_none()
			&& self.unknown_items.is_empty()
	}

	/// Build a tag from decoded sub-chunks
	///
	/// The first item of each registered ID populates its field. Everything else ends up in
	/// [`Xid6Tag::unknown_items`], in order.
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::{Xid6Item, Xid6Tag};
	///
	/// let tag = Xid6Tag::from_items([
	/// 	Xid6Item::new_inline(0x33, 100),
	/// 	Xid6Item::new_inline(0x33, 200),
	/// ]);
	///
	/// assert_eq!(tag.fade_length(), Some(100));
	/// assert_eq!(tag.unknown_items().len(), 1);
	/// ```
	pub fn from_items<I>(items: I) -> Self
	where
		I: IntoIterator<Item = Xid6Item>,
	{
		let mut tag = Self::default();

		for item in items {
			let leftover = match item.id() {
				SONG_NAME => claim(&mut tag.title, item, Xid6Value::into_text),
				GAME_NAME => claim(&mut tag.game, item, Xid6Value::into_text),
				ARTIST_NAME => claim(&mut tag.artist, item, Xid6Value::into_text),
				DUMPER_NAME => claim(&mut tag.dumper, item, Xid6Value::into_text),
				DUMP_DATE => claim(&mut tag.date, item, Xid6Value::into_integer),
				EMULATOR => claim(&mut tag.emulator, item, Xid6Value::into_data),
				COMMENTS => claim(&mut tag.comments, item, Xid6Value::into_text),
				OST_TITLE => claim(&mut tag.official_title, item, Xid6Value::into_text),
				OST_DISC => claim(&mut tag.disc, item, Xid6Value::into_data),
				OST_TRACK => claim(&mut tag.track, item, Xid6Value::into_track),
				PUBLISHER_NAME => claim(&mut tag.publisher, item, Xid6Value::into_text),
				COPYRIGHT_YEAR => claim(&mut tag.copyright_year, item, Xid6Value::into_data),
				INTRO_LENGTH => claim(&mut tag.intro_length, item, Xid6Value::into_integer),
				LOOP_LENGTH => claim(&mut tag.loop_length, item, Xid6Value::into_integer),
				END_LENGTH => claim(&mut tag.end_length, item, Xid6Value::into_integer),
				FADE_LENGTH => claim(&mut tag.fade_length, item, Xid6Value::into_integer),
				MUTED_VOICES => claim(&mut tag.muted_channels, item, Xid6Value::into_data),
				LOOP_COUNT => claim(&mut tag.loop_count, item, Xid6Value::into_data),
				MIXING_LEVEL => claim(&mut tag.mixing_level, item, Xid6Value::into_data),
				_ => Some(item),
			};

			if let Some(item) = leftover {
				tag.unknown_items.push(item);
			}
		}

		tag
	}

	/// Convert the tag back into sub-chunks
	///
	/// Registered fields come first, ordered by ID, followed by the unknown items.
	///
	/// # Errors
	///
	/// * A text field isn't Latin-1, and `lossy_text_encoding` is disabled
	/// * A text or data field is longer than `i16::MAX` bytes
	/// * The track suffix is not printable ASCII
	pub fn to_items(&self, lossy_text_encoding: bool) -> Result<Vec<Xid6Item>> {
		let mut items = Vec::new();

		let mut push = |id: u8, value: Option<Xid6Value>| -> Result<()> {
			if let Some(value) = value {
				items.push(Xid6Item::from_value(id, value, lossy_text_encoding)?);
			}

			Ok(())
		};

		push(SONG_NAME, self.title.clone().map(Xid6Value::Text))?;
		push(GAME_NAME, self.game.clone().map(Xid6Value::Text))?;
		push(ARTIST_NAME, self.artist.clone().map(Xid6Value::Text))?;
		push(DUMPER_NAME, self.dumper.clone().map(Xid6Value::Text))?;
		push(DUMP_DATE, self.date.map(Xid6Value::Integer))?;
		push(EMULATOR, self.emulator.clone().map(Xid6Value::Data))?;
		push(COMMENTS, self.comments.clone().map(Xid6Value::Text))?;
		push(OST_TITLE, self.official_title.clone().map(Xid6Value::Text))?;
		push(OST_DISC, self.disc.clone().map(Xid6Value::Data))?;
		push(OST_TRACK, self.track.map(Xid6Value::Track))?;
		push(PUBLISHER_NAME, self.publisher.clone().map(Xid6Value::Text))?;
		push(COPYRIGHT_YEAR, self.copyright_year.clone().map(Xid6Value::Data))?;
		push(INTRO_LENGTH, self.intro_length.map(Xid6Value::Integer))?;
		push(LOOP_LENGTH, self.loop_length.map(Xid6Value::Integer))?;
		push(END_LENGTH, self.end_length.map(Xid6Value::Integer))?;
		push(FADE_LENGTH, self.fade_length.map(Xid6Value::Integer))?;
		push(MUTED_VOICES, self.muted_channels.clone().map(Xid6Value::Data))?;
		push(LOOP_COUNT, self.loop_count.clone().map(Xid6Value::Data))?;
		push(MIXING_LEVEL, self.mixing_level.clone().map(Xid6Value::Data))?;

		items.extend(self.unknown_items.iter().cloned());

		Ok(items)
	}

	/// Read the extended tag from an SPC file
	///
	/// A file ending at or before [`XID6_OFFSET`](super::XID6_OFFSET) simply has no extended tag,
	/// and `Ok(None)` is returned.
	///
	/// # Errors
	///
	/// * The chunk does not start with [`XID6_MAGIC`](super::XID6_MAGIC)
	/// * The chunk declares a negative size, or a size larger than the rest of the file
	/// * A sub-chunk is truncated, unless [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed)
	/// * The chunk is larger than the [allocation limit](ParseOptions::allocation_limit)
	/// * Any I/O error
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::config::ParseOptions;
	/// use spctag::xid6::Xid6Tag;
	/// use std::io::Cursor;
	///
	/// # fn main() -> spctag::error::Result<()> {
	/// // Only the base tag
	/// let mut file = Cursor::new(vec![0; 0x10200]);
	/// assert!(Xid6Tag::read_from(&mut file, ParseOptions::new())?.is_none());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Self>>
	where
		R: Read + Seek,
	{
		super::read::read_xid6(reader, parse_options)
	}

	/// Write the extended tag to an SPC file
	///
	/// Any existing chunk is replaced. If the tag is empty, the existing chunk is removed instead
	/// (see [`Xid6Tag::remove_from`]).
	///
	/// # Errors
	///
	/// * `file` is too short to hold the chunk at [`XID6_OFFSET`](super::XID6_OFFSET)
	/// * The tag can't be converted into items (see [`Xid6Tag::to_items`])
	/// * Any I/O error, in which case the file may be partially written
	pub fn write_to<F>(&self, file: &mut F, write_options: WriteOptions) -> Result<()>
	where
		F: FileLike,
		SpcTagError: From<<F as Truncate>::Error>,
		SpcTagError: From<<F as Length>::Error>,
	{
		super::write::write_xid6(file, self, write_options)
	}

	/// Remove the extended tag from an SPC file
	///
	/// Everything from [`XID6_OFFSET`](super::XID6_OFFSET) onwards is truncated. A file without an
	/// extended tag is left as is.
	///
	/// # Errors
	///
	/// * Any I/O error
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::xid6::Xid6Tag;
	/// use std::io::Cursor;
	///
	/// # fn main() -> spctag::error::Result<()> {
	/// let mut file = vec![0; 0x10200];
	/// file.extend_from_slice(b"xid6\x04\x00\x00\x00\x35\x00\x02\x00");
	///
	/// let mut file = Cursor::new(file);
	/// Xid6Tag::remove_from(&mut file)?;
	/// assert_eq!(file.get_ref().len(), 0x10200);
	/// # Ok(()) }
	/// ```
	pub fn remove_from<F>(file: &mut F) -> Result<()>
	where
		F: FileLike,
		SpcTagError: From<<F as Truncate>::Error>,
		SpcTagError: From<<F as Length>::Error>,
	{
		super::write::write_chunk(file, None)
	}

	/// Remove the extended tag from the SPC file at `path`
	///
	/// # Errors
	///
	/// * `path` can't be opened for reading and writing
	/// * See [`Xid6Tag::remove_from`]
	pub fn remove_from_path<P>(path: P) -> Result<()>
	where
		P: AsRef<Path>,
	{
		let mut file = OpenOptions::new().read(true).write(true).open(path)?;
		Self::remove_from(&mut file)
	}

	/// Dump the encoded chunk to a writer
	///
	/// This does not check the tag for emptiness, an empty tag is written as a bare chunk header.
	///
	/// # Errors
	///
	/// * The tag can't be converted into items (see [`Xid6Tag::to_items`])
	/// * Any I/O error
	pub fn dump_to<W: Write>(&self, writer: &mut W, write_options: WriteOptions) -> Result<()> {
		let chunk = super::write::encode(self, write_options)?;
		writer.write_all(&chunk)?;

		Ok(())
	}
}

// Moves the item's value into `slot`, unless it's already taken
fn claim<T>(
	slot: &mut Option<T>,
	item: Xid6Item,
	into: fn(Xid6Value) -> Option<T>,
) -> Option<Xid6Item> {
	if slot.is_some() {
		return Some(item);
	}

	let Xid6Item {
		header,
		data,
		value,
	} = item;

	match into(value) {
		Some(value) => {
			*slot = Some(value);
			None
		},
		None => Some(Xid6Item::from_parts(header, data)),
	}
}

#[cfg(test)]
mod tests {
	use crate::config::WriteOptions;
	use crate::xid6::{ItemData, Track, Xid6Item, Xid6Tag};

	#[test_log::test]
	fn first_occurrence_wins() {
		let tag = Xid6Tag::from_items([
			Xid6Item::new_with_data(0x01, b"First\0".to_vec()).unwrap(),
			Xid6Item::new_inline(0x50, 1),
			Xid6Item::new_with_data(0x01, b"Second\0".to_vec()).unwrap(),
		]);

		assert_eq!(tag.title(), Some("First"));
		assert_eq!(tag.unknown_items().len(), 2);
		assert_eq!(tag.unknown_items()[0].id(), 0x50);
		assert_eq!(tag.unknown_items()[1].id(), 0x01);
		assert_eq!(tag.unknown_items()[1].description(), "Song Name");
	}

	#[test_log::test]
	fn every_field() {
		let items = [
			Xid6Item::new_with_data(0x01, b"Song\0".to_vec()).unwrap(),
			Xid6Item::new_with_data(0x02, b"Game\0".to_vec()).unwrap(),
			Xid6Item::new_with_data(0x03, b"Artist\0".to_vec()).unwrap(),
			Xid6Item::new_with_data(0x04, b"Dumper\0".to_vec()).unwrap(),
			Xid6Item::new_with_data(0x05, 20_010_617_i32.to_le_bytes().to_vec()).unwrap(),
			Xid6Item::new_inline(0x06, 2),
			Xid6Item::new_with_data(0x07, b"Comments\0".to_vec()).unwrap(),
			Xid6Item::new_with_data(0x10, b"OST\0".to_vec()).unwrap(),
			Xid6Item::new_inline(0x11, 1),
			Xid6Item::new_inline(0x12, 0x0561),
			Xid6Item::new_with_data(0x13, b"Publisher\0".to_vec()).unwrap(),
			Xid6Item::new_inline(0x14, 1995),
			Xid6Item::new_inline(0x30, 64),
			Xid6Item::new_with_data(0x31, 640_000_i32.to_le_bytes().to_vec()).unwrap(),
			Xid6Item::new_inline(0x32, 0),
			Xid6Item::new_inline(0x33, 6400),
			Xid6Item::new_inline(0x34, 0b1000_0001),
			Xid6Item::new_inline(0x35, 3),
			Xid6Item::new_with_data(0x36, 0x0001_0000_u32.to_le_bytes().to_vec()).unwrap(),
		];

		let tag = Xid6Tag::from_items(items);

		assert_eq!(tag.title(), Some("Song"));
		assert_eq!(tag.game(), Some("Game"));
		assert_eq!(tag.artist(), Some("Artist"));
		assert_eq!(tag.dumper(), Some("Dumper"));
		assert_eq!(tag.date(), Some(20_010_617));
		assert_eq!(tag.emulator(), Some(&ItemData::Inline(2)));
		assert_eq!(tag.comments(), Some("Comments"));
		assert_eq!(tag.official_title(), Some("OST"));
		assert_eq!(tag.disc(), Some(&ItemData::Inline(1)));
		assert_eq!(
			tag.track(),
			Some(Track {
				number: 5,
				suffix: Some('a')
			})
		);
		assert_eq!(tag.publisher(), Some("Publisher"));
		assert_eq!(tag.copyright_year().map(ItemData::as_u32), Some(1995));
		assert_eq!(tag.intro_length(), Some(64));
		assert_eq!(tag.loop_length(), Some(640_000));
		assert_eq!(tag.end_length(), Some(0));
		assert_eq!(tag.fade_length(), Some(6400));
		assert_eq!(tag.muted_channels(), Some(&ItemData::Inline(0b1000_0001)));
		assert_eq!(tag.loop_count(), Some(&ItemData::Inline(3)));
		assert_eq!(tag.mixing_level().map(ItemData::as_u32), Some(0x0001_0000));
		assert!(tag.unknown_items().is_empty());

		// Every field survives the trip back to items
		let reparsed = Xid6Tag::from_items(tag.to_items(false).unwrap());
		assert_eq!(reparsed, tag);
	}

	#[test_log::test]
	fn registry_order() {
		let mut tag = Xid6Tag::new();
		tag.unknown_items_mut().push(Xid6Item::new_inline(0x40, 1));
		tag.set_fade_length(1);
		tag.set_title(String::from("Title"));
		tag.set_track(Track {
			number: 1,
			suffix: None,
		});

		let ids = tag
			.to_items(false)
			.unwrap()
			.iter()
			.map(Xid6Item::id)
			.collect::<Vec<_>>();
		assert_eq!(ids, [0x01, 0x12, 0x33, 0x40]);
	}

	#[test_log::test]
	fn emptiness() {
		let mut tag = Xid6Tag::new();
		assert!(tag.is_empty());

		tag.set_loop_count(ItemData::Inline(0));
		assert!(!tag.is_empty());

		tag.remove_loop_count();
		assert!(tag.is_empty());

		tag.unknown_items_mut().push(Xid6Item::new_inline(0x40, 1));
		assert!(!tag.is_empty());
	}

	#[test_log::test]
	fn dump_empty() {
		let mut dumped = Vec::new();
		Xid6Tag::new()
			.dump_to(&mut dumped, WriteOptions::default())
			.unwrap();

		assert_eq!(dumped, b"xid6\0\0\0\0");
	}
}
