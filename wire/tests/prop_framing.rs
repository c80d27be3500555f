use proptest::prelude::*;
use wire::{decode_length, encode_length, Opcode, Profile, RequestHeader, TOTAL_CALLS};

proptest! {
    #[test]
    fn prop_length_split_roundtrip(total in 0usize..=0x00FF_FFFF) {
        let (hi, lo) = encode_length(total).unwrap();
        prop_assert_eq!(decode_length(hi, lo) as usize, total);
    }

    #[test]
    fn prop_length_overflow_rejected(total in 0x0100_0000usize..0x0200_0000) {
        prop_assert!(encode_length(total).is_err());
    }

    #[test]
    fn prop_aligned_len_properties(total in 0usize..0x0010_0000, compact in any::<bool>()) {
        let profile = if compact { Profile::COMPACT } else { Profile::STANDARD };
        let aligned = profile.aligned_len(total);
        prop_assert_eq!(aligned % profile.align, 0);
        prop_assert!(aligned >= total);
        prop_assert!(aligned < total + profile.align);
        // Idempotence
        prop_assert_eq!(profile.aligned_len(aligned), aligned);
    }

    #[test]
    fn prop_header_roundtrip(raw in 0u8..TOTAL_CALLS, total in 4u32..=0x00FF_FFFF) {
        let header = RequestHeader {
            opcode: Opcode::parse(raw).unwrap(),
            total,
        };
        let mut buf = [0u8; 4];
        header.encode(&mut buf).unwrap();
        prop_assert_eq!(RequestHeader::decode(&buf).unwrap(), header);
    }
}
