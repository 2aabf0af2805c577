use super::classify::{SpanKind, classify};
use super::layout::{FieldSpan, Layout};
use super::{ID666_END, read_region};
use crate::config::ParseOptions;
use crate::error::Result;

use std::io::{Read, Seek};

// The probes cover the widest form of each field, so they straddle
// neighboring binary fields in places.
const DATE_PROBE: FieldSpan = FieldSpan::new(0x9E, 11);
const SONG_LENGTH_PROBE: FieldSpan = FieldSpan::new(0xA9, 3);
const FADE_LENGTH_PROBE: FieldSpan = FieldSpan::new(0xAC, 5);
const CHANNEL_DISABLE_PROBE: usize = 0xD1;
const EMULATOR_PROBE: usize = 0xD2;

/// Guess the [`Layout`] of the base tag in `reader`
///
/// This reads the header and hands it to [`detect_layout`].
///
/// # Errors
///
/// * `reader` is too short to contain a base tag
/// * Any other I/O error
///
/// # Examples
///
/// ```rust
/// use spctag::config::ParseOptions;
/// use spctag::id666::{Layout, detect};
/// use std::io::Cursor;
///
/// # fn main() -> spctag::error::Result<()> {
/// let mut header = vec![0; 0x100];
/// header[0xD1] = 1;
///
/// let layout = detect(&mut Cursor::new(header), ParseOptions::new())?;
/// assert_eq!(layout, Layout::Binary);
/// # Ok(()) }
/// ```
pub fn detect<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Layout>
where
	R: Read + Seek,
{
	let region = read_region(reader)?;
	Ok(detect_layout(
		&region,
		parse_options.prefer_binary_on_ambiguity,
	))
}

/// Guess the [`Layout`] of a base tag from the start of an SPC file
///
/// `header` holds the file's first bytes, so tag fields are found at their absolute offsets.
///
/// The decision is made from the date, song length, and fade length fields, as those are the only ones
/// encoded differently between the layouts. This is a heuristic, and is biased towards the fixed
/// pattern written by ZSNES. When the bytes are equally valid in both layouts, `prefer_binary_on_ambiguity`
/// decides.
///
/// The same bytes always produce the same `Layout`.
///
/// # Examples
///
/// ```rust
/// use spctag::id666::{Layout, detect_layout};
///
/// let mut header = [0; 0xD3];
/// header[0x9E..0xA8].copy_from_slice(b"06/17/2001");
///
/// assert_eq!(detect_layout(&header, true), Layout::Text);
/// ```
pub fn detect_layout(header: &[u8; ID666_END], prefer_binary_on_ambiguity: bool) -> Layout {
	let ambiguous = || {
		log::debug!(
			"Unable to determine the base tag layout, preferring binary: {}",
			prefer_binary_on_ambiguity
		);

		if prefer_binary_on_ambiguity {
			Layout::Binary
		} else {
			Layout::Text
		}
	};

	let date = &header[DATE_PROBE.range()];
	let date_kind = classify(date);
	let song_kind = classify(&header[SONG_LENGTH_PROBE.range()]);
	let fade_kind = classify(&header[FADE_LENGTH_PROBE.range()]);

	let channel_disable = header[CHANNEL_DISABLE_PROBE];
	let emulator = header[EMULATOR_PROBE];

	log::trace!(
		"Base tag probes: date = {date_kind:?}, song length = {song_kind:?}, fade length = \
		 {fade_kind:?}"
	);

	let layout = match (song_kind, fade_kind, date_kind) {
		// No times or date, check for ZSNES' signature before falling back
		(SpanKind::Empty, SpanKind::Empty, SpanKind::Empty) => {
			if channel_disable == 1 && emulator == 0 {
				log::debug!("Base tag matches the ZSNES signature");
				Layout::Binary
			} else {
				ambiguous()
			}
		},
		(SpanKind::Binary, _, _) | (_, SpanKind::Binary, _) => Layout::Binary,
		// The times are empty or text from here on
		(_, _, SpanKind::Text) => Layout::Text,
		// Digits are valid in both layouts (binary 56 is text '8')
		(_, _, SpanKind::Empty) => ambiguous(),
		(_, _, SpanKind::Binary) => {
			// ZSNES leaves these zeroed, anything else is more likely
			// to be a text date with letters in it
			if date[4..7].iter().all(|b| *b == 0) {
				Layout::Binary
			} else {
				Layout::Text
			}
		},
	};

	log::debug!("Base tag layout: {layout:?}");
	layout
}
