//! Wire framing for the nanowire GUI protocol.
//!
//! This crate defines the rules shared by every request on the wire: the
//! 4-byte request header with its 24-bit split length field, the alignment
//! rule, and the closed catalog of request layouts. It carries no mutable
//! state—the client-side request queue lives in `reqbuf`.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Opcode numbers and field layouts are protocol
//!   surface and never change.
//! - **Explicit serialization** - Every field is written at a known offset
//!   with a known width; no struct layout is ever relied upon.
//! - **Catalog as data** - Adding an opcode touches the catalog table only,
//!   never the buffer manager.
//!
//! See `WIRE_FORMAT.md` for the complete specification.

mod catalog;
mod error;
mod header;
mod limits;
mod opcode;
mod profile;
mod request;

pub use catalog::{
    event_payload_len, Field, Layout, FONT_FORMAT_LEN, LOGFONT_WIRE_LEN, PALETTE_WIRE_LEN,
};
pub use error::{DecodeError, EncodeError, WireResult};
pub use header::{
    decode_length, encode_length, RequestHeader, MAX_WIRE_LEN, REQ_HEADER_LEN,
};
pub use limits::Limits;
pub use opcode::{Opcode, TOTAL_CALLS};
pub use profile::{IdWidth, Profile};
pub use request::{decode_request, FieldReader, Request};

/// Resource identifier as carried in request fields.
///
/// On the wire an identifier occupies [`IdWidth`] bytes; the compact
/// profile truncates to 16 bits and callers must keep ids in that range.
pub type Id = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = REQ_HEADER_LEN;
        let _ = MAX_WIRE_LEN;
        let _ = TOTAL_CALLS;
        let _ = Profile::STANDARD;
        let _ = Profile::COMPACT;
        let _ = Limits::default();
        let _ = Opcode::Open;
        let _: Id = 0;

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn header_len_matches_layout() {
        // opcode(1) + hilength(1) + length(2)
        assert_eq!(REQ_HEADER_LEN, 1 + 1 + 2);
    }

    #[test]
    fn every_opcode_has_a_layout() {
        for raw in 0..TOTAL_CALLS {
            let opcode = Opcode::parse(raw).unwrap();
            let layout = opcode.layout();
            assert!(layout.fixed_len(Profile::STANDARD) >= REQ_HEADER_LEN);
            assert!(layout.fixed_len(Profile::COMPACT) >= REQ_HEADER_LEN);
        }
    }
}
