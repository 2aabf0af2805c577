use super::field::{PUBLISHER_NAME, describe};
use super::item::{SUB_CHUNK_HEADER_SIZE, SubChunkHeader, Xid6Item};
use super::tag::Xid6Tag;
use super::{XID6_MAGIC, XID6_OFFSET};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{ErrorKind, Result, SpcTagError};
use crate::macros::{malformed_err, parse_mode_choice, try_vec};
use crate::util::io::SeekStreamLen;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

const CHUNK_HEADER_SIZE: u64 = 8;

pub(crate) fn read_xid6<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Option<Xid6Tag>>
where
	R: Read + Seek,
{
	let stream_len = reader.stream_len_hack()?;
	if stream_len <= XID6_OFFSET {
		log::debug!("File ends before the extended chunk, no extended tag present");
		return Ok(None);
	}

	let available = stream_len - XID6_OFFSET;
	if available < CHUNK_HEADER_SIZE {
		malformed_err!(@BAIL "chunk header is truncated");
	}

	reader.seek(SeekFrom::Start(XID6_OFFSET))?;

	let mut magic = [0; 4];
	reader.read_exact(&mut magic)?;
	if magic != XID6_MAGIC {
		return Err(SpcTagError::new(ErrorKind::MagicMismatch(magic)));
	}

	let Ok(mut size) = u64::try_from(reader.read_i32::<LittleEndian>()?) else {
		malformed_err!(@BAIL "chunk declares a negative size");
	};

	let available = available - CHUNK_HEADER_SIZE;
	if size > available {
		let parse_mode = parse_options.parsing_mode;
		parse_mode_choice!(
			parse_mode,
			RELAXED: {
				log::warn!(
					"Extended chunk declares {size} bytes, only {available} remain. Reading what is left"
				);
				size = available;
			},
			DEFAULT: malformed_err!(@BAIL "chunk size exceeds the remaining data")
		);
	}

	log::debug!("Reading extended chunk, payload size: {size}");

	let mut payload = try_vec![0; size as usize, parse_options.allocation_limit];
	reader.read_exact(&mut payload)?;

	let items = parse_payload(&payload, parse_options.parsing_mode)?;
	Ok(Some(Xid6Tag::from_items(items)))
}

/// Split a chunk payload into its sub-chunks
///
/// With [`ParsingMode::Relaxed`], a truncated sub-chunk ends the payload, keeping everything
/// before it.
pub(crate) fn parse_payload(payload: &[u8], parse_mode: ParsingMode) -> Result<Vec<Xid6Item>> {
	let mut items = Vec::new();
	let mut remaining = payload;

	while !remaining.is_empty() {
		match next_item(&mut remaining) {
			Ok(item) => items.push(item),
			Err(err) => parse_mode_choice!(
				parse_mode,
				RELAXED: {
					log::warn!(
						"Extended chunk is malformed after {} items, discarding the rest: {err}",
						items.len()
					);
					break;
				},
				DEFAULT: return Err(err)
			),
		}
	}

	Ok(items)
}

fn next_item(remaining: &mut &[u8]) -> Result<Xid6Item> {
	let current = *remaining;
	let Some((header, rest)) = current.split_first_chunk::<SUB_CHUNK_HEADER_SIZE>() else {
		malformed_err!(@BAIL "sub-chunk header is truncated");
	};

	let header = SubChunkHeader::parse(*header);
	log::debug!(
		"Found sub-chunk {:#04X} ({})",
		header.id,
		describe(header.id)
	);

	if !header.has_data() {
		*remaining = rest;
		return Ok(Xid6Item::from_parts(header, None));
	}

	let Ok(mut len) = usize::try_from(header.value) else {
		malformed_err!(@BAIL "sub-chunk declares a negative data length");
	};

	if header.id == PUBLISHER_NAME {
		len = publisher_len(len, rest);
	}

	if len > rest.len() {
		malformed_err!(@BAIL "sub-chunk data is truncated");
	}

	let data = rest[..len].to_vec();

	let padded_len = len.next_multiple_of(4);
	if padded_len > rest.len() {
		log::warn!("Sub-chunk {:#04X} is missing its alignment padding", header.id);
		*remaining = &[];
	} else {
		*remaining = &rest[padded_len..];
	}

	Ok(Xid6Item::from_parts(header, Some(data)))
}

// Some writers declare a publisher length one byte past the actual data, which throws off
// every sub-chunk after it. Walk the length back until it lines up with the rest of the payload
// again, or until the byte it ends on is a NUL terminator.
fn publisher_len(declared: usize, rest: &[u8]) -> usize {
	let misaligned = |len: usize| (rest.len() as i64 - len as i64).rem_euclid(4) != 0;

	let mut len = declared;
	while len > 0 && misaligned(len) && rest.get(len - 1).is_none_or(|b| *b != 0) {
		len -= 1;
	}

	if len == 0 {
		return declared;
	}

	if len != declared {
		log::warn!("Publisher sub-chunk declares {declared} bytes, using {len}");
	}

	len
}
