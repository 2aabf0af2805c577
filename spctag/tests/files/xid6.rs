use crate::util::{XID6_OFFSET, spc_image, temp_file, text_image, with_chunk};
use spctag::config::{ParseOptions, ParsingMode, WriteOptions};
use spctag::error::ErrorKind;
use spctag::tag::SpcTag;
use spctag::xid6::{DataType, ItemData, Track, Xid6Item, Xid6Tag, Xid6Value};

use std::io::{Cursor, Read, Seek};

// A chunk as written by a typical tagger
const PAYLOAD: &[u8] = &[
	0x01, 0x01, 0x0A, 0x00, b'S', b'o', b'n', b'g', b' ', b't', b'i', b't', b'l', b'e', 0x00, 0x00, // Song name
	0x05, 0x04, 0x04, 0x00, 0x79, 0x56, 0x31, 0x01, // Dump date, 20010617
	0x12, 0x00, 0x62, 0x04, // Track 4b
	0x13, 0x01, 0x09, 0x00, b'N', b'i', b'n', b't', b'e', b'n', b'd', b'o', 0x00, 0x00, 0x00, 0x00, // Publisher
	0x14, 0x00, 0xCB, 0x07, // Copyright year, 1995
	0x31, 0x04, 0x04, 0x00, 0x00, 0xC4, 0x09, 0x00, // Loop length, 640000
	0x33, 0x00, 0x00, 0x7D, // Fade length, 32000
	0x42, 0x00, 0x07, 0x00, // Unknown
];

#[test_log::test]
fn read() {
	let image = with_chunk(text_image(), PAYLOAD);
	let tag = spctag::read_from(&mut Cursor::new(image), ParseOptions::new()).unwrap();

	// The base tag is unaffected
	assert_eq!(tag.base.title, "Foo title");

	let extended = tag.extended.unwrap();
	assert_eq!(extended.title(), Some("Song title"));
	assert_eq!(extended.date(), Some(20_010_617));
	assert_eq!(
		extended.track(),
		Some(Track {
			number: 4,
			suffix: Some('b')
		})
	);
	assert_eq!(extended.publisher(), Some("Nintendo"));
	assert_eq!(extended.copyright_year(), Some(&ItemData::Inline(1995)));
	assert_eq!(extended.loop_length(), Some(640_000));
	assert_eq!(extended.fade_length(), Some(32_000));
	assert!(extended.game().is_none());

	let unknown = extended.unknown_items();
	assert_eq!(unknown.len(), 1);
	assert_eq!(unknown[0].id(), 0x42);
	assert_eq!(unknown[0].description(), "Unknown");
	assert_eq!(unknown[0].data_type(), None);
	assert_eq!(unknown[0].value(), &Xid6Value::Data(ItemData::Inline(7)));
}

#[test_log::test]
fn corrupt_publisher() {
	let payload = [
		0x13, 0x01, 0x09, 0x00, b'N', b'i', b'n', b't', b'e', b'n', b'd', b'o', // Publisher, 1 byte short
		0x33, 0x00, 0x00, 0x7D, // Fade length
	];

	let image = with_chunk(spc_image(), &payload);
	let tag = spctag::read_from(&mut Cursor::new(image), ParseOptions::new()).unwrap();

	let extended = tag.extended.unwrap();
	assert_eq!(extended.publisher(), Some("Nintendo"));
	assert_eq!(extended.fade_length(), Some(32_000));
	assert!(extended.unknown_items().is_empty());
}

#[test_log::test]
fn truncated_chunk() {
	// The song name declares 16 bytes, only 3 remain
	let payload = [
		0x33, 0x00, 0x00, 0x7D, // Fade length
		0x01, 0x01, 0x10, 0x00, b'F', b'o', b'o',
	];
	let image = with_chunk(text_image(), &payload);

	// Best attempt, the extended tag is dropped
	let tag = spctag::read_from(&mut Cursor::new(&image), ParseOptions::new()).unwrap();
	assert_eq!(tag.base.title, "Foo title");
	assert!(tag.extended.is_none());

	// Strict, the whole read fails
	let err = spctag::read_from(
		&mut Cursor::new(&image),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedChunk(_)));

	// Relaxed, whatever came before the truncation is kept
	let tag = spctag::read_from(
		&mut Cursor::new(&image),
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	)
	.unwrap();
	let extended = tag.extended.unwrap();
	assert_eq!(extended.fade_length(), Some(32_000));
	assert!(extended.title().is_none());
}

#[test_log::test]
fn standalone_extended_read() {
	let mut image = with_chunk(spc_image(), PAYLOAD);
	image[XID6_OFFSET] = b'X';

	// The base tag can still be read on its own
	let base = spctag::id666::Id666Tag::read_from(&mut Cursor::new(&image), ParseOptions::new());
	assert!(base.is_ok());

	let err = Xid6Tag::read_from(&mut Cursor::new(&image), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MagicMismatch(found) if found == b"Xid6"));
}

#[test_log::test]
fn write_and_reread() {
	let mut file = Cursor::new(text_image());
	let mut tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert!(tag.extended.is_none());

	let mut extended = Xid6Tag::new();
	extended.set_title(String::from("A title longer than the base tag's 32 bytes allow"));
	extended.set_official_title(String::from("Official Soundtrack"));
	extended.set_disc(ItemData::Inline(2));
	extended.set_track(Track {
		number: 12,
		suffix: None,
	});
	extended.set_intro_length(-1);
	extended.set_end_length(1 << 20);
	extended.set_muted_channels(ItemData::Inline(0b1111_0000));
	extended.set_mixing_level(ItemData::Block(vec![0x00, 0x00, 0x01, 0x00]));
	extended
		.unknown_items_mut()
		.push(Xid6Item::new_with_data(0x60, vec![0xDE, 0xAD, 0xBE]).unwrap());
	tag.extended = Some(extended);

	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	let read = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read, tag);

	let extended = read.extended.unwrap();
	let unknown = &extended.unknown_items()[0];
	assert_eq!(unknown.data(), Some(&[0xDE, 0xAD, 0xBE][..]));
}

#[test_log::test]
fn rewrite_is_stable() {
	let image = with_chunk(text_image(), PAYLOAD);
	let mut file = Cursor::new(image);

	let tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();
	let first = file.get_ref().clone();

	let tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();
	assert_eq!(file.get_ref(), &first);
}

#[test_log::test]
fn remove_chunk() {
	let mut file = Cursor::new(with_chunk(text_image(), PAYLOAD));

	let mut tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	let chunk_len = 8 + PAYLOAD.len();

	// Left alone when disabled
	tag.extended.as_mut().unwrap().remove_title();
	spctag::save_to(&tag, &mut file, WriteOptions::new().write_extended_tag(false)).unwrap();
	assert_eq!(file.get_ref().len(), XID6_OFFSET + chunk_len);

	// Left alone when there's no extended tag
	tag.extended = None;
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();
	assert_eq!(file.get_ref().len(), XID6_OFFSET + chunk_len);
	assert_eq!(&file.get_ref()[XID6_OFFSET + 8..], PAYLOAD);

	// Removed by an empty extended tag
	tag.extended = Some(Xid6Tag::new());
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();
	assert_eq!(file.get_ref().len(), XID6_OFFSET);

	let read = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert!(read.extended.is_none());
}

#[test_log::test]
fn unreadable_chunk_is_kept() {
	// The song name declares 16 bytes, only 3 remain
	let payload = [
		0x33, 0x00, 0x00, 0x7D, // Fade length
		0x01, 0x01, 0x10, 0x00, b'F', b'o', b'o',
	];
	let image = with_chunk(text_image(), &payload);
	let mut file = Cursor::new(image.clone());

	let mut tag = spctag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert!(tag.extended.is_none());

	tag.base.title = String::from("New title");
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	let content = file.into_inner();
	assert_eq!(content.len(), image.len());
	assert_eq!(&content[XID6_OFFSET..], &image[XID6_OFFSET..]);
	assert_eq!(&content[0x2E..0x37], b"New title");
}

#[test_log::test]
fn remove_from_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("extended.spc");
	std::fs::write(&path, with_chunk(spc_image(), PAYLOAD)).unwrap();

	Xid6Tag::remove_from_path(&path).unwrap();
	assert_eq!(std::fs::read(&path).unwrap().len(), XID6_OFFSET);

	// Nothing left to remove
	Xid6Tag::remove_from_path(&path).unwrap();
	assert_eq!(std::fs::read(&path).unwrap().len(), XID6_OFFSET);
}

#[test_log::test]
fn temp_file_round_trip() {
	let mut file = temp_file(&with_chunk(spc_image(), PAYLOAD));

	let mut tag = spctag::read_from(&mut file, ParseOptions::new()).unwrap();
	let extended = tag.extended.as_mut().unwrap();
	extended.set_comments(String::from("Comments"));
	extended.remove_publisher();

	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	file.rewind().unwrap();
	let mut content = Vec::new();
	file.read_to_end(&mut content).unwrap();
	assert_eq!(&content[XID6_OFFSET..XID6_OFFSET + 4], b"xid6");

	let read = spctag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read.extended, tag.extended);
	assert!(read.extended.unwrap().publisher().is_none());
}

#[test_log::test]
fn registry() {
	let text_fields = spctag::xid6::XID6_FIELDS
		.iter()
		.filter(|field| field.data_type == DataType::Text)
		.map(|field| field.id)
		.collect::<Vec<_>>();
	assert_eq!(text_fields, [0x01, 0x02, 0x03, 0x04, 0x07, 0x10, 0x13]);

	assert_eq!(spctag::xid6::describe(0x12).split(' ').next(), Some("OST"));
	assert_eq!(spctag::xid6::describe(0x99), "Unknown");
}
