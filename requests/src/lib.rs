//! Typed builders for every request in the nanowire GUI protocol.
//!
//! One function per catalog opcode, grouped by functional area. Each
//! builder allocates through a [`reqbuf::RequestQueue`], fills the fixed
//! fields in catalog order, appends the tail where the opcode takes one,
//! and returns without flushing — batching stays the caller's decision.
//!
//! Builders never interpret server replies; requests that expect one
//! still only frame the outgoing bytes.

pub mod clipboard;
pub mod connection;
pub mod cursor;
pub mod draw;
pub mod font;
pub mod gc;
pub mod image;
pub mod input;
pub mod misc;
pub mod region;
pub mod window;

mod types;

pub use types::{InjectedEvent, LogFont, PalEntry, Rect};

use reqbuf::RequestWriter;

/// Narrows a tail element count to a 16-bit wire field. Counts come
/// from slice lengths the caller controls; overflow is a caller bug,
/// caught in debug.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn count_u16(len: usize) -> u16 {
    debug_assert!(len <= usize::from(u16::MAX), "count {len} exceeds 16 bits");
    len as u16
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn count_i16(len: usize) -> i16 {
    debug_assert!(len <= 0x7FFF, "count {len} exceeds 15 bits");
    len as i16
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn count_u32(len: usize) -> u32 {
    debug_assert!(len <= u32::MAX as usize, "count {len} exceeds 32 bits");
    len as u32
}

/// Writes a 16-bit-word tail (bitmap rows) in wire order.
pub(crate) fn put_words(req: &mut RequestWriter<'_>, words: &[u16]) {
    for &word in words {
        req.put_u16(word);
    }
}

/// Writes a point-table tail, x before y per point.
pub(crate) fn put_points(req: &mut RequestWriter<'_>, points: &[(i16, i16)]) {
    for &(x, y) in points {
        req.put_i16(x);
        req.put_i16(y);
    }
}

#[cfg(test)]
mod tests {
    use reqbuf::RequestQueue;
    use wire::{Limits, Profile};

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = crate::Rect::default();
        let _ = crate::PalEntry::default();
        let _ = crate::LogFont::default();
        let _ = crate::InjectedEvent::Pointer {
            x: 0,
            y: 0,
            buttons: 0,
            visible: true,
        };
        let mut queue = RequestQueue::new(Profile::STANDARD, Limits::for_testing());
        crate::connection::open(&mut queue, 1).unwrap();
    }
}
