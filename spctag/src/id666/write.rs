use super::layout::{FieldSpan, Layout};
use super::tag::{Emulator, Id666Tag};
use super::{ID666_END, ID666_START};
use crate::config::WriteOptions;
use crate::error::{ErrorKind, Result, SpcTagError};
use crate::macros::oversized_err;
use crate::util::text::latin1_encode;

use std::io::{Seek, SeekFrom, Write};

pub(crate) const REGION_SIZE: usize = ID666_END - ID666_START;

pub(super) fn write_id666<W>(
	writer: &mut W,
	tag: &Id666Tag,
	write_options: WriteOptions,
) -> Result<()>
where
	W: Write + Seek,
{
	// Nothing is written until every field is encoded
	let region = encode(tag, write_options)?;

	log::debug!("Writing {:?} base tag", tag.layout);
	write_region(writer, &region)
}

pub(crate) fn write_region<W>(writer: &mut W, region: &[u8; REGION_SIZE]) -> Result<()>
where
	W: Write + Seek,
{
	writer.seek(SeekFrom::Start(ID666_START as u64))?;
	writer.write_all(region)?;

	Ok(())
}

/// Encode the entire tag region, starting at `ID666_START`
///
/// Bytes not covered by the layout (binary leaves a few gaps) are zeroed.
pub(crate) fn encode(tag: &Id666Tag, write_options: WriteOptions) -> Result<[u8; REGION_SIZE]> {
	let mut region = [0; REGION_SIZE];
	let fields = tag.layout.fields();
	let lossy = write_options.lossy_text_encoding;

	let mut put = |span: FieldSpan, bytes: &[u8]| {
		let start = span.offset - ID666_START;
		region[start..start + bytes.len()].copy_from_slice(bytes);
	};

	put(fields.title, &encode_text("title", &tag.title, fields.title, lossy)?);
	put(fields.game, &encode_text("game", &tag.game, fields.game, lossy)?);
	put(fields.dumper, &encode_text("dumper", &tag.dumper, fields.dumper, lossy)?);
	put(
		fields.comments,
		&encode_text("comments", &tag.comments, fields.comments, lossy)?,
	);
	// Text, regardless of layout
	put(fields.date, &encode_text("date", &tag.date, fields.date, lossy)?);
	put(fields.artist, &encode_text("artist", &tag.artist, fields.artist, lossy)?);
	put(fields.muted_channels, &[tag.muted_channels]);

	put(
		fields.song_length,
		&encode_number(
			"length_before_fadeout",
			tag.length_before_fadeout,
			fields.song_length,
			tag.layout,
		)?,
	);
	put(
		fields.fade_length,
		&encode_number(
			"fadeout_length",
			tag.fadeout_length,
			fields.fade_length,
			tag.layout,
		)?,
	);

	match tag.layout {
		Layout::Binary => put(fields.emulator, &[encode_binary_emulator(&tag.emulator)?]),
		Layout::Text => put(
			fields.emulator,
			&encode_text("emulator", &tag.emulator.code(), fields.emulator, lossy)?,
		),
	}

	Ok(region)
}

fn encode_text(field: &'static str, value: &str, span: FieldSpan, lossy: bool) -> Result<Vec<u8>> {
	let encoded = latin1_encode(value, lossy).collect::<std::result::Result<Vec<u8>, _>>()?;
	if encoded.len() > span.len {
		oversized_err!(@BAIL field, span.len, encoded.len());
	}

	Ok(encoded)
}

fn encode_number(field: &'static str, value: u32, span: FieldSpan, layout: Layout) -> Result<Vec<u8>> {
	match layout {
		Layout::Binary => {
			let max = if span.len >= 4 {
				u32::MAX
			} else {
				(1 << (span.len * 8)) - 1
			};

			if value > max {
				oversized_err!(@BAIL field, max as usize, value as usize);
			}

			Ok(value.to_le_bytes()[..span.len].to_vec())
		},
		Layout::Text => {
			let digits = value.to_string();
			if digits.len() > span.len {
				oversized_err!(@BAIL field, span.len, digits.len());
			}

			Ok(digits.into_bytes())
		},
	}
}

fn encode_binary_emulator(emulator: &Emulator) -> Result<u8> {
	let code = emulator.code();

	// Binary codes are read back as signed bytes, but accept the unsigned form as well
	code.parse::<i8>()
		.map(|code| code as u8)
		.or_else(|_| code.parse::<u8>())
		.map_err(|_| {
			SpcTagError::new(ErrorKind::InvalidFieldValue {
				field: "emulator",
				reason: "binary emulator codes must be 8-bit integers",
			})
		})
}
