use std::fs::File;
use std::io::{Seek as _, Write as _};

pub const XID6_OFFSET: usize = 0x10200;

const HEADER: &[u8; 33] = b"SNES-SPC700 Sound File Data v0.30";

/// An SPC file with no tags, ending right where the extended chunk would start
pub fn spc_image() -> Vec<u8> {
	let mut image = vec![0; XID6_OFFSET];
	image[..HEADER.len()].copy_from_slice(HEADER);
	image[0x21..0x23].copy_from_slice(&[26, 26]);
	// Header contains an ID666 tag
	image[0x23] = 26;
	image[0x24] = 30;

	image
}

pub fn put(image: &mut [u8], offset: usize, bytes: &[u8]) {
	image[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// An image with a text base tag, as written by most tools
pub fn text_image() -> Vec<u8> {
	let mut image = spc_image();
	put(&mut image, 0x2E, b"Foo title");
	put(&mut image, 0x4E, b"Bar game");
	put(&mut image, 0x6E, b"Baz dumper");
	put(&mut image, 0x7E, b"Qux comment");
	put(&mut image, 0x9E, b"06/17/2001");
	put(&mut image, 0xA9, b"180");
	put(&mut image, 0xAC, b"10000");
	put(&mut image, 0xB1, b"Quux artist");
	image[0xD2] = b'2';

	image
}

/// An image with a binary base tag
pub fn binary_image() -> Vec<u8> {
	let mut image = spc_image();
	put(&mut image, 0x2E, b"Foo title");
	put(&mut image, 0x4E, b"Bar game");
	put(&mut image, 0x6E, b"Baz dumper");
	put(&mut image, 0x7E, b"Qux comment");
	put(&mut image, 0xA9, &[0xB4, 0x00, 0x00]);
	put(&mut image, 0xAC, &10_000_u32.to_le_bytes());
	put(&mut image, 0xB0, b"Quux artist");
	image[0xD1] = 1;

	image
}

/// Append an extended chunk holding `payload`
pub fn with_chunk(mut image: Vec<u8>, payload: &[u8]) -> Vec<u8> {
	image.truncate(XID6_OFFSET);
	image.extend_from_slice(b"xid6");
	image.extend_from_slice(&(payload.len() as i32).to_le_bytes());
	image.extend_from_slice(payload);

	image
}

/// Create a new temporary file holding `content`
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}
