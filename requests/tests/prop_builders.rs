//! Property tests for the typed builders.
//!
//! Random arguments through a builder must produce a request the
//! receive-side decoder accepts, with every fixed field reading back in
//! catalog order and the tail carrying exactly the caller's payload.

use proptest::prelude::*;
use reqbuf::RequestQueue;
use requests::{draw, gc, image, window};
use wire::{decode_request, FieldReader, Limits, Opcode, Profile};

fn queue() -> RequestQueue {
    RequestQueue::new(Profile::STANDARD, Limits::standard())
}

fn decode(queue: &RequestQueue) -> wire::Request<'_> {
    decode_request(queue.pending(), Profile::STANDARD, &Limits::standard()).unwrap()
}

proptest! {
    #[test]
    fn prop_move_window_fields_read_back(
        window_id in 1u32..=0x00FF_FFFF,
        x in any::<i16>(),
        y in any::<i16>(),
    ) {
        let mut q = queue();
        window::move_window(&mut q, window_id, x, y).unwrap();
        let request = decode(&q);
        prop_assert_eq!(request.opcode, Opcode::MoveWindow);
        let mut reader = FieldReader::new(request.fixed, Profile::STANDARD);
        prop_assert_eq!(reader.get_id().unwrap(), window_id);
        prop_assert_eq!(reader.get_i16().unwrap(), x);
        prop_assert_eq!(reader.get_i16().unwrap(), y);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn prop_poly_tail_is_point_table(
        points in prop::collection::vec((any::<i16>(), any::<i16>()), 0..64),
    ) {
        let mut q = queue();
        draw::poly(&mut q, 1, 2, &points).unwrap();
        let request = decode(&q);
        prop_assert_eq!(request.tail.len(), points.len() * 4);
        for (chunk, &(x, y)) in request.tail.chunks_exact(4).zip(&points) {
            prop_assert_eq!(&chunk[0..2], &x.to_le_bytes());
            prop_assert_eq!(&chunk[2..4], &y.to_le_bytes());
        }
    }

    #[test]
    fn prop_get_gc_text_size_orders_flags_before_count(
        gc_id in 1u32..=0x00FF_FFFF,
        flags in any::<u32>(),
        text in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        let mut q = queue();
        gc::get_gc_text_size(&mut q, gc_id, flags, &text).unwrap();
        let request = decode(&q);
        let mut reader = FieldReader::new(request.fixed, Profile::STANDARD);
        prop_assert_eq!(reader.get_id().unwrap(), gc_id);
        prop_assert_eq!(reader.get_u32().unwrap(), flags);
        prop_assert_eq!(reader.get_u32().unwrap(), u32::try_from(text.len()).unwrap());
        prop_assert_eq!(request.tail, text.as_slice());
    }

    #[test]
    fn prop_draw_image_bits_fields_read_back_in_order(
        (x, y, flags) in (any::<i16>(), any::<i16>(), any::<i16>()),
        (width, height) in (any::<i16>(), any::<i16>()),
        (planes, bpp, palette_size) in (any::<i16>(), any::<i16>(), any::<i16>()),
        (data_format, pitch, transparent_color) in (any::<u32>(), any::<u32>(), any::<u32>()),
        data in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        let mut q = queue();
        image::draw_image_bits(
            &mut q, 1, 2, x, y, flags, width, height, planes, bpp, palette_size,
            data_format, pitch, transparent_color, &data,
        )
        .unwrap();
        let request = decode(&q);
        prop_assert_eq!(request.opcode, Opcode::DrawImageBits);
        let mut reader = FieldReader::new(request.fixed, Profile::STANDARD);
        prop_assert_eq!(reader.get_id().unwrap(), 1);
        prop_assert_eq!(reader.get_id().unwrap(), 2);
        for expected in [x, y, flags, width, height, planes, bpp, palette_size] {
            prop_assert_eq!(reader.get_i16().unwrap(), expected);
        }
        for expected in [data_format, pitch, transparent_color] {
            prop_assert_eq!(reader.get_u32().unwrap(), expected);
        }
        prop_assert_eq!(reader.remaining(), 0);
        prop_assert_eq!(request.tail, data.as_slice());
    }
}
