#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use spctag::config::ParseOptions;

const XID6_OFFSET: usize = 0x10200;

fuzz_target!(|data: Vec<u8>| {
	// The header goes at the start, everything after it lands where the extended chunk lives
	let split = data.len().min(0xD3);
	let mut image = data[..split].to_vec();
	image.resize(XID6_OFFSET, 0);
	image.extend_from_slice(&data[split..]);

	let _ = spctag::read_from(&mut Cursor::new(image), ParseOptions::new());
});
