#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use spctag::config::{ParseOptions, ParsingMode};
use spctag::xid6::Xid6Tag;

const XID6_OFFSET: usize = 0x10200;

fuzz_target!(|data: Vec<u8>| {
	let mut image = vec![0; XID6_OFFSET];
	image.extend_from_slice(b"xid6");
	image.extend_from_slice(&(data.len() as i32).to_le_bytes());
	image.extend_from_slice(&data);

	for parsing_mode in [ParsingMode::Strict, ParsingMode::Relaxed] {
		let _ = Xid6Tag::read_from(
			&mut Cursor::new(&image),
			ParseOptions::new().parsing_mode(parsing_mode),
		);
	}
});
