#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use spctag::config::{ParseOptions, ParsingMode, WriteOptions};

const XID6_OFFSET: usize = 0x10200;

fuzz_target!(|data: Vec<u8>| {
	let split = data.len().min(0xD3);
	let mut image = data[..split].to_vec();
	image.resize(XID6_OFFSET, 0);
	image.extend_from_slice(b"xid6");
	image.extend_from_slice(&((data.len() - split) as i32).to_le_bytes());
	image.extend_from_slice(&data[split..]);

	let mut file = Cursor::new(image);
	let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
	if let Ok(tag) = spctag::read_from(&mut file, parse_options) {
		let _ = spctag::save_to(&tag, &mut file, WriteOptions::default());
		let _ = spctag::read_from(&mut file, parse_options);
	}
});
