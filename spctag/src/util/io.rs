//! Traits for the stores an SPC file can be written to
//!
//! Saving a tag needs more than [`Read`], [`Write`], and [`Seek`]. The extended tag lives at the very
//! end of the file, so [`save_to`](crate::save_to) has to know how long the store is, and has to be
//! able to shrink it when the extended tag gets smaller or is removed.

use crate::error::SpcTagError;

use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};

// TODO: Replace with `Seek::stream_len` once https://github.com/rust-lang/rust/issues/59359 is stabilized
pub(crate) trait SeekStreamLen: Seek {
	fn stream_len_hack(&mut self) -> crate::error::Result<u64> {
		let current_pos = self.stream_position()?;
		let len = self.seek(SeekFrom::End(0))?;

		self.seek(SeekFrom::Start(current_pos))?;

		Ok(len)
	}
}

impl<T> SeekStreamLen for T where T: Seek {}

/// Shrink a store to a new length
///
/// One component of [`FileLike`]. After a call, spctag assumes the store is **exactly** `new_len`
/// bytes long. An implementation that doesn't uphold this will leave stale extended tag data behind.
///
/// # Examples
///
/// ```rust
/// use spctag::io::Truncate;
///
/// // An SPC file with a 12 byte extended chunk
/// let mut spc = vec![0u8; 0x10200 + 12];
///
/// // Drop the chunk
/// Truncate::truncate(&mut spc, 0x10200).unwrap();
/// assert_eq!(spc.len(), 0x10200);
/// ```
pub trait Truncate {
	/// The error produced when the store can't be shrunk
	type Error: Into<SpcTagError>;

	/// Shrink the store to `new_len` bytes
	///
	/// # Errors
	///
	/// Depends on the store. In-memory stores are infallible.
	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error>;
}

/// Get the length of a store
///
/// One component of [`FileLike`]. The reported length decides whether a store is large enough to
/// hold an extended tag, so it must be the **full** length, not the remaining length from the
/// current position.
///
/// # Examples
///
/// ```rust
/// use spctag::io::Length;
/// use std::io::Cursor;
///
/// let spc = Cursor::new(vec![0u8; 0x10200]);
/// assert_eq!(Length::len(&spc).unwrap(), 0x10200);
/// ```
pub trait Length {
	/// The error produced when the length can't be determined
	type Error: Into<SpcTagError>;

	/// Get the full length of the store in bytes
	///
	/// # Errors
	///
	/// Depends on the store. In-memory stores are infallible.
	fn len(&self) -> std::result::Result<u64, Self::Error>;
}

impl Truncate for File {
	type Error = std::io::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.set_len(new_len)
	}
}

impl Length for File {
	type Error = std::io::Error;

	fn len(&self) -> std::result::Result<u64, Self::Error> {
		self.metadata().map(|m| m.len())
	}
}

impl Truncate for Vec<u8> {
	type Error = std::convert::Infallible;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		Vec::truncate(self, new_len as usize);
		Ok(())
	}
}

impl Length for Vec<u8> {
	type Error = std::convert::Infallible;

	fn len(&self) -> std::result::Result<u64, Self::Error> {
		Ok(Vec::len(self) as u64)
	}
}

// Stores that only wrap another store
macro_rules! impl_forwarding {
	($($ty:ty => |$store:ident| $inner:expr, $inner_mut:expr);+ $(;)?) => {
		$(
			impl<T> Truncate for $ty
			where
				T: Truncate,
			{
				type Error = <T as Truncate>::Error;

				fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
					let $store = self;
					Truncate::truncate($inner_mut, new_len)
				}
			}

			impl<T> Length for $ty
			where
				T: Length,
			{
				type Error = <T as Length>::Error;

				fn len(&self) -> std::result::Result<u64, Self::Error> {
					let $store = self;
					Length::len($inner)
				}
			}
		)+
	};
}

impl_forwarding! {
	Cursor<T> => |store| store.get_ref(), store.get_mut();
	&mut T => |store| &**store, &mut **store;
}

/// A store that an SPC file can be saved to
///
/// A combination of [`Read`], [`Write`], [`Seek`], [`Truncate`], and [`Length`], implemented for
/// everything that provides all five. Out of the box, that includes [`File`], and [`Cursor`]s over
/// a `Vec<u8>` or `&mut Vec<u8>`.
pub trait FileLike: Read + Write + Seek + Truncate + Length
where
	<Self as Truncate>::Error: Into<SpcTagError>,
	<Self as Length>::Error: Into<SpcTagError>,
{
}

impl<T> FileLike for T
where
	T: Read + Write + Seek + Truncate + Length,
	<T as Truncate>::Error: Into<SpcTagError>,
	<T as Length>::Error: Into<SpcTagError>,
{
}
