use super::item::Xid6Item;
use super::tag::Xid6Tag;
use super::{XID6_MAGIC, XID6_OFFSET};
use crate::config::WriteOptions;
use crate::error::{Result, SpcTagError};
use crate::macros::err;
use crate::util::io::{FileLike, Length, Truncate};

use std::io::{SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

pub(crate) fn write_xid6<F>(file: &mut F, tag: &Xid6Tag, write_options: WriteOptions) -> Result<()>
where
	F: FileLike,
	SpcTagError: From<<F as Truncate>::Error>,
	SpcTagError: From<<F as Length>::Error>,
{
	if tag.is_empty() {
		return write_chunk(file, None);
	}

	let chunk = encode(tag, write_options)?;
	write_chunk(file, Some(&chunk))
}

/// Replace the extended chunk, or remove it when `chunk` is `None`
pub(crate) fn write_chunk<F>(file: &mut F, chunk: Option<&[u8]>) -> Result<()>
where
	F: FileLike,
	SpcTagError: From<<F as Truncate>::Error>,
	SpcTagError: From<<F as Length>::Error>,
{
	let file_len = file.len()?;

	let Some(chunk) = chunk else {
		// The chunk is always the last thing in the file, so removing it is a simple truncation
		if file_len > XID6_OFFSET {
			log::debug!("Removing the extended chunk");
			file.truncate(XID6_OFFSET)?;
		}

		return Ok(());
	};

	if file_len < XID6_OFFSET {
		err!(SizeMismatch);
	}

	file.seek(SeekFrom::Start(XID6_OFFSET))?;
	file.write_all(chunk)?;

	// Anything left over from a larger chunk
	file.truncate(XID6_OFFSET + chunk.len() as u64)?;

	Ok(())
}

/// Encode the entire chunk, including its magic and size
pub(crate) fn encode(tag: &Xid6Tag, write_options: WriteOptions) -> Result<Vec<u8>> {
	let items = tag.to_items(write_options.lossy_text_encoding)?;

	let payload_size = items.iter().map(Xid6Item::encoded_size).sum::<usize>();
	let Ok(size) = i32::try_from(payload_size) else {
		err!(TooMuchData);
	};

	log::debug!(
		"Encoding extended chunk, {} items, payload size: {payload_size}",
		items.len()
	);

	let mut chunk = Vec::with_capacity(payload_size + 8);
	chunk.write_all(&XID6_MAGIC)?;
	chunk.write_i32::<LittleEndian>(size)?;

	for item in &items {
		chunk.write_all(&item.header.as_bytes())?;

		if let Some(data) = &item.data {
			chunk.write_all(data)?;

			let padding = data.len().next_multiple_of(4) - data.len();
			chunk.resize(chunk.len() + padding, 0);
		}
	}

	Ok(chunk)
}
