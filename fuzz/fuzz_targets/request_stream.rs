#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{decode_request, Limits, Profile};

// Walk arbitrary bytes as a batched request stream under both profiles.
// Decoding must reject garbage with an error, never panic, and every
// accepted request must advance the cursor.
fuzz_target!(|data: &[u8]| {
    for (profile, limits) in [
        (Profile::STANDARD, Limits::for_testing()),
        (Profile::COMPACT, Limits::compact()),
    ] {
        let mut rest = data;
        while !rest.is_empty() {
            match decode_request(rest, profile, &limits) {
                Ok(request) => {
                    let advance = request.aligned_len(profile);
                    assert!(advance >= 4);
                    assert!(request.fixed.len() + request.tail.len() + 4 == request.total as usize);
                    if advance > rest.len() {
                        break;
                    }
                    rest = &rest[advance..];
                }
                Err(_) => break,
            }
        }
    }
});
