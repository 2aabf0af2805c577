//! The combined tag of an SPC file

use crate::config::{ParseOptions, WriteOptions};
use crate::error::{ErrorKind, Result, SpcTagError};
use crate::id666::Id666Tag;
use crate::macros::parse_mode_choice;
use crate::util::io::{FileLike, Length, Truncate};
use crate::xid6::Xid6Tag;
use crate::{id666, xid6};

use std::io::{Read, Seek};

/// Both tags of an SPC file
///
/// The two halves are entirely independent. A malformed extended tag does not affect the base tag,
/// see [`ParsingMode`](crate::config::ParsingMode) for how it is handled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpcTag {
	/// The base (ID666) tag, always present
	pub base: Id666Tag,
	/// The extended (XID6) tag, if the file has one
	pub extended: Option<Xid6Tag>,
}

impl SpcTag {
	/// Create a new `SpcTag`
	///
	/// # Examples
	///
	/// ```rust
	/// use spctag::id666::Id666Tag;
	/// use spctag::tag::SpcTag;
	///
	/// let tag = SpcTag::new(Id666Tag::new(), None);
	/// assert!(tag.base.is_empty());
	/// ```
	pub fn new(base: Id666Tag, extended: Option<Xid6Tag>) -> Self {
		Self { base, extended }
	}

	/// Read both tags from an SPC file
	///
	/// # Errors
	///
	/// * [`Id666Tag::read_from`]
	/// * [`Xid6Tag::read_from`], only with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	///   Otherwise, the extended tag is discarded. I/O errors are always propagated.
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		let base = Id666Tag::read_from(reader, parse_options)?;

		let mut extended = None;
		if parse_options.read_extended_tag {
			extended = match Xid6Tag::read_from(reader, parse_options) {
				Ok(extended) => extended,
				Err(err) if matches!(err.kind(), ErrorKind::Io(_)) => return Err(err),
				Err(err) => {
					let parse_mode = parse_options.parsing_mode;
					parse_mode_choice!(
						parse_mode,
						STRICT: return Err(err),
						DEFAULT: {
							log::warn!("Unable to read the extended tag, discarding it: {err}");
							None
						}
					)
				},
			};
		}

		Ok(Self { base, extended })
	}

	/// Write both tags to an SPC file
	///
	/// Both tags are encoded before anything is written, so an invalid field leaves `file` untouched.
	///
	/// If [`SpcTag::extended`] is `None`, whatever follows the SPC data is left untouched. This is
	/// the case for a tag read with an unreadable or skipped extended chunk, so saving it doesn't
	/// lose the chunk. To remove the chunk, set an empty [`Xid6Tag`] or use [`Xid6Tag::remove_from`].
	///
	/// # Errors
	///
	/// * [`Id666Tag::write_to`]
	/// * [`Xid6Tag::write_to`]
	/// * Any I/O error, in which case the file may be partially written
	pub fn save_to<F>(&self, file: &mut F, write_options: WriteOptions) -> Result<()>
	where
		F: FileLike,
		SpcTagError: From<<F as Truncate>::Error>,
		SpcTagError: From<<F as Length>::Error>,
	{
		let region = id666::write::encode(&self.base, write_options)?;

		let extended = self
			.extended
			.as_ref()
			.filter(|_| write_options.write_extended_tag);

		if let Some(extended) = extended {
			let chunk = if extended.is_empty() {
				None
			} else {
				Some(xid6::write::encode(extended, write_options)?)
			};

			// The size check happens first, before the base tag is touched
			xid6::write::write_chunk(file, chunk.as_deref())?;
		}

		log::debug!("Writing {:?} base tag", self.base.layout);
		id666::write::write_region(file, &region)
	}
}
