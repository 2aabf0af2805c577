//! Read and write the metadata tags of SPC files.
//!
//! An SPC file can carry two tags:
//!
//! * The base [ID666](id666) tag, a set of fixed-width fields in the file header. It can be stored
//!   as either binary or text, and since nothing records which, the encoding is guessed from the
//!   tag's contents.
//! * The extended [XID6](xid6) tag, a chunk of self-describing sub-chunks after the SPC data.
//!
//! # Examples
//!
//! ## Reading
//!
//! ```rust,no_run
//! # fn main() -> spctag::error::Result<()> {
//! use spctag::config::ParseOptions;
//!
//! let tag = spctag::read_from_path("music.spc", ParseOptions::new())?;
//!
//! println!("Title: {}", tag.base.title);
//! println!("Emulator: {}", tag.base.emulator.name());
//!
//! if let Some(extended) = &tag.extended {
//! 	println!("Publisher: {:?}", extended.publisher());
//! }
//! # Ok(()) }
//! ```
//!
//! ## Ambiguous base tags
//!
//! When the base tag fits both encodings equally well, the text layout is assumed. A collection
//! known to use binary tags can say so:
//!
//! ```rust,no_run
//! # fn main() -> spctag::error::Result<()> {
//! use spctag::config::ParseOptions;
//!
//! let parse_options = ParseOptions::new().prefer_binary_on_ambiguity(true);
//! let tag = spctag::read_from_path("music.spc", parse_options)?;
//! # Ok(()) }
//! ```
//!
//! ## Writing
//!
//! ```rust,no_run
//! # fn main() -> spctag::error::Result<()> {
//! use spctag::config::{ParseOptions, WriteOptions};
//! use spctag::xid6::Xid6Tag;
//!
//! let mut tag = spctag::read_from_path("music.spc", ParseOptions::new())?;
//!
//! tag.base.title = String::from("Title");
//! tag.extended
//! 	.get_or_insert_with(Xid6Tag::new)
//! 	.set_publisher(String::from("Publisher"));
//!
//! spctag::save_to_path(&tag, "music.spc", WriteOptions::default())?;
//! # Ok(()) }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod id666;
pub(crate) mod macros;
pub mod tag;
mod util;
pub mod xid6;

pub use util::io;

use crate::config::{ParseOptions, WriteOptions};
use crate::error::{Result, SpcTagError};
use crate::io::{FileLike, Length, Truncate};
use crate::tag::SpcTag;

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Read an [`SpcTag`] from a reader
///
/// # Errors
///
/// See [`SpcTag::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use spctag::config::ParseOptions;
/// use std::fs::File;
///
/// # fn main() -> spctag::error::Result<()> {
/// let mut file = File::open("music.spc")?;
///
/// let tag = spctag::read_from(&mut file, ParseOptions::new())?;
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<SpcTag>
where
	R: Read + Seek,
{
	SpcTag::read_from(reader, parse_options)
}

/// Read an [`SpcTag`] from a path
///
/// # Errors
///
/// * `path` can't be opened
/// * See [`SpcTag::read_from`]
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<SpcTag>
where
	P: AsRef<Path>,
{
	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, parse_options)
}

/// Write an [`SpcTag`] to a file
///
/// # Errors
///
/// See [`SpcTag::save_to`]
///
/// # Examples
///
/// ```rust,no_run
/// use spctag::config::{ParseOptions, WriteOptions};
/// use std::fs::OpenOptions;
///
/// # fn main() -> spctag::error::Result<()> {
/// // We'll need to open our file for reading *and* writing
/// let mut file = OpenOptions::new().read(true).write(true).open("music.spc")?;
///
/// let mut tag = spctag::read_from(&mut file, ParseOptions::new())?;
/// tag.base.comments = String::from("Dumped from the cartridge");
///
/// spctag::save_to(&tag, &mut file, WriteOptions::default())?;
/// # Ok(()) }
/// ```
pub fn save_to<F>(tag: &SpcTag, file: &mut F, write_options: WriteOptions) -> Result<()>
where
	F: FileLike,
	SpcTagError: From<<F as Truncate>::Error>,
	SpcTagError: From<<F as Length>::Error>,
{
	tag.save_to(file, write_options)
}

/// Write an [`SpcTag`] to a path
///
/// # Errors
///
/// * `path` can't be opened for reading and writing
/// * See [`SpcTag::save_to`]
pub fn save_to_path<P>(tag: &SpcTag, path: P, write_options: WriteOptions) -> Result<()>
where
	P: AsRef<Path>,
{
	let mut file = OpenOptions::new().read(true).write(true).open(path)?;
	save_to(tag, &mut file, write_options)
}
