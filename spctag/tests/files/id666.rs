use crate::util::{binary_image, put, spc_image, temp_file, text_image};
use spctag::config::{ParseOptions, ParsingMode, WriteOptions};
use spctag::id666::{Emulator, Id666Tag, Layout, detect};
use spctag::tag::SpcTag;

use std::io::{Cursor, Read, Seek};

#[test_log::test]
fn zsnes_signature_is_binary() {
	// No times or date, but the channel disable and emulator bytes match what ZSNES writes
	let mut image = spc_image();
	image[0xD1] = 1;
	image[0xD2] = 0;

	let layout = detect(&mut Cursor::new(&image), ParseOptions::new()).unwrap();
	assert_eq!(layout, Layout::Binary);

	// The preference isn't consulted
	let layout = detect(
		&mut Cursor::new(&image),
		ParseOptions::new().prefer_binary_on_ambiguity(true),
	)
	.unwrap();
	assert_eq!(layout, Layout::Binary);
}

#[test_log::test]
fn empty_tag_uses_preference() {
	let image = spc_image();

	let layout = detect(&mut Cursor::new(&image), ParseOptions::new()).unwrap();
	assert_eq!(layout, Layout::Text);

	let layout = detect(
		&mut Cursor::new(&image),
		ParseOptions::new().prefer_binary_on_ambiguity(true),
	)
	.unwrap();
	assert_eq!(layout, Layout::Binary);
}

#[test_log::test]
fn read_text() {
	let tag = spctag::read_from(&mut Cursor::new(text_image()), ParseOptions::new()).unwrap();
	let base = tag.base;

	assert_eq!(base.layout, Layout::Text);
	assert_eq!(base.title, "Foo title");
	assert_eq!(base.game, "Bar game");
	assert_eq!(base.dumper, "Baz dumper");
	assert_eq!(base.comments, "Qux comment");
	assert_eq!(base.date, "06/17/2001");
	assert_eq!(base.length_before_fadeout, 180);
	assert_eq!(base.fadeout_length, 10_000);
	assert_eq!(base.artist, "Quux artist");
	assert_eq!(base.emulator, Emulator::Snes9x);
	assert!(tag.extended.is_none());
}

#[test_log::test]
fn read_binary() {
	let tag = spctag::read_from(&mut Cursor::new(binary_image()), ParseOptions::new()).unwrap();
	let base = tag.base;

	assert_eq!(base.layout, Layout::Binary);
	assert_eq!(base.title, "Foo title");
	assert_eq!(base.date, "");
	assert_eq!(base.length_before_fadeout, 180);
	assert_eq!(base.fadeout_length, 10_000);
	assert_eq!(base.artist, "Quux artist");
	assert_eq!(base.emulator, Emulator::Zsnes);
}

#[test_log::test]
fn invalid_text_number() {
	let mut image = text_image();
	// Valid text to the detector, but not a number
	put(&mut image, 0xA9, b"1/2");

	let tag = spctag::read_from(&mut Cursor::new(&image), ParseOptions::new()).unwrap();
	assert_eq!(tag.base.length_before_fadeout, 0);
	assert_eq!(tag.base.fadeout_length, 10_000);

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	assert!(spctag::read_from(&mut Cursor::new(&image), strict).is_err());
}

#[test_log::test]
fn too_short() {
	let image = vec![0; 0x80];
	assert!(spctag::read_from(&mut Cursor::new(image), ParseOptions::new()).is_err());
}

#[test_log::test]
fn binary_round_trip() {
	let mut file = Cursor::new(binary_image());
	let mut tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();

	tag.base.title = String::from("A new title");
	tag.base.muted_channels = 0b0101_0000;
	tag.base.length_before_fadeout = 0x00AB_CDEF;
	tag.base.fadeout_length = u32::MAX;
	tag.base.emulator = Emulator::Other(String::from("-3"));

	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	let read = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read, tag);
}

#[test_log::test]
fn text_round_trip() {
	let mut file = Cursor::new(text_image());
	let mut tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();

	tag.base.artist = String::from("Caf\u{e9}");
	tag.base.length_before_fadeout = 999;
	tag.base.fadeout_length = 99_999;
	tag.base.emulator = Emulator::ZsnesW;

	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	let read = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read, tag);
}

#[test_log::test]
fn change_layout() {
	let mut file = Cursor::new(text_image());
	let mut tag = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();

	// The text date doesn't fit in the binary layout
	tag.base.layout = Layout::Binary;
	assert!(spctag::save_to(&tag, &mut file, WriteOptions::default()).is_err());

	tag.base.date = String::new();
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	// Nothing is left over from the text tag
	let image = file.get_ref();
	assert_eq!(&image[0xA9..0xAC], &[0xB4, 0x00, 0x00]);
	assert_eq!(&image[0xB0..0xBB], b"Quux artist");
	assert_eq!(image[0xD1], 2);
	assert_eq!(image[0xD2], 0);

	let read = SpcTag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read.base, tag.base);
}

#[test_log::test]
fn header_is_untouched() {
	let original = binary_image();
	let mut file = Cursor::new(original.clone());

	let tag = SpcTag::new(Id666Tag::new(), None);
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	let image = file.into_inner();
	assert_eq!(image.len(), original.len());
	assert_eq!(&image[..0x2E], &original[..0x2E]);
	assert_eq!(&image[0xD3..], &original[0xD3..]);
}

#[test_log::test]
fn temp_file_round_trip() {
	let mut file = temp_file(&text_image());

	let mut tag = spctag::read_from(&mut file, ParseOptions::new()).unwrap();
	tag.base.title = String::from("Temporary title");

	file.rewind().unwrap();
	spctag::save_to(&tag, &mut file, WriteOptions::default()).unwrap();

	file.rewind().unwrap();
	let mut content = Vec::new();
	file.read_to_end(&mut content).unwrap();
	assert_eq!(&content[0x2E..0x3D], b"Temporary title");

	let read = spctag::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(read.base, tag.base);
}
