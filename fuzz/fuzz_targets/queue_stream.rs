#![no_main]

use libfuzzer_sys::fuzz_target;
use reqbuf::{RequestQueue, StreamTransport};
use wire::{decode_request, Limits, Opcode, Profile, TOTAL_CALLS};

// Drive the queue with arbitrary opcode and tail-length choices. Every
// batch it accumulates must walk cleanly through the decoder, and a
// flush must hand the transport the exact pending bytes and reset the
// cursor.
fuzz_target!(|data: &[u8]| {
    for (profile, limits) in [
        (Profile::STANDARD, Limits::for_testing()),
        (Profile::COMPACT, Limits::compact()),
    ] {
        let mut queue = RequestQueue::new(profile, limits);
        let mut accepted = 0usize;
        let mut bytes = data.iter();
        while let (Some(&op), Some(&len)) = (bytes.next(), bytes.next()) {
            let Ok(opcode) = Opcode::parse(op % TOTAL_CALLS) else {
                continue;
            };
            let tail = if opcode.layout().has_tail {
                usize::from(len) * 4
            } else {
                0
            };
            if queue.allocate(opcode, tail).is_ok() {
                accepted += 1;
            }
        }

        let mut stream = queue.pending();
        let mut decoded = 0usize;
        while !stream.is_empty() {
            let request = decode_request(stream, profile, &limits).unwrap();
            stream = &stream[request.aligned_len(profile)..];
            decoded += 1;
        }
        assert_eq!(decoded, accepted);

        let pending_len = queue.pending_len();
        let mut transport = StreamTransport::new(Vec::new());
        queue.flush(&mut transport, false).unwrap();
        assert!(queue.is_empty());
        assert_eq!(transport.get_ref().len(), pending_len);
    }
});
