//! Extended (XID6) tag items
//!
//! The extended tag is a single chunk placed right after the SPC data, at [`XID6_OFFSET`]:
//!
//! ```text
//! +--------+---------------+---------------------+
//! | "xid6" | size (i32 LE) | sub-chunks (size)   |
//! +--------+---------------+---------------------+
//! ```
//!
//! Each sub-chunk is a [`SubChunkHeader`], optionally followed by a data block padded to a multiple of
//! 4 bytes. How the contents are interpreted depends on the field ID, see [`XID6_FIELDS`].

mod field;
mod item;
pub(crate) mod read;
mod tag;
pub(crate) mod write;

pub use field::{DataType, XID6_FIELDS, Xid6Field, describe, field_info};
pub use item::{ItemData, SubChunkHeader, Track, Xid6Item, Xid6Value};
pub use tag::Xid6Tag;

/// The absolute offset of the extended chunk
pub const XID6_OFFSET: u64 = 0x10200;
/// The identifier at the start of the extended chunk
pub const XID6_MAGIC: [u8; 4] = *b"xid6";
