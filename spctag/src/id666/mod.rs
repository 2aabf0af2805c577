//! Base (ID666) tag items
//!
//! The base tag lives at a fixed position in the SPC header, and comes in two flavors: binary and
//! text. Nothing in the file says which one was used, so the [`Layout`] has to be guessed from the
//! tag's contents (see [`detect_layout`]).
//!
//! Reading and writing both go through a single [`Layout`], a tag never mixes the two.

mod classify;
mod detect;
mod layout;
mod read;
mod tag;
pub(crate) mod write;

pub use classify::{SpanKind, classify};
pub use detect::{detect, detect_layout};
pub use layout::Layout;
pub use tag::{Emulator, Id666Tag};

use crate::error::Result;

use std::io::{Read, Seek, SeekFrom};

/// The absolute offset of the first base tag field
pub const ID666_START: usize = 0x2E;
/// The absolute offset just past the last base tag field
pub const ID666_END: usize = 0xD3;

pub(crate) fn read_region<R>(reader: &mut R) -> Result<[u8; ID666_END]>
where
	R: Read + Seek,
{
	let mut region = [0; ID666_END];

	reader.seek(SeekFrom::Start(0))?;
	reader.read_exact(&mut region)?;

	Ok(region)
}
