#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{FieldReader, Profile};

// Drive a bounded sequence of field reads over arbitrary bytes; reads
// past the end must fail with Truncated, never panic.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let (ops, fields) = data.split_at(data.len() / 2);
    for profile in [Profile::STANDARD, Profile::COMPACT] {
        let mut reader = FieldReader::new(fields, profile);
        for &op in ops.iter().take(1024) {
            match op % 6 {
                0 => {
                    let _ = reader.get_id();
                }
                1 => {
                    let _ = reader.get_i16();
                }
                2 => {
                    let _ = reader.get_u16();
                }
                3 => {
                    let _ = reader.get_u32();
                }
                4 => {
                    let _ = reader.get_u8();
                }
                _ => {
                    let _ = reader.get_raw(usize::from(op));
                }
            }
        }
        assert!(reader.remaining() <= fields.len());
    }
});
