//! Region arithmetic requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

use crate::{put_points, put_words, Rect};

/// Creates an empty region; the id arrives in the reply.
pub fn new_region(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::NewRegion, 0)?;
    Ok(())
}

pub fn destroy_region(queue: &mut RequestQueue, region: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyRegion, 0)?;
    req.put_id(region);
    Ok(())
}

pub fn union_rect_with_region(queue: &mut RequestQueue, region: Id, rect: Rect) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::UnionRectWithRegion, 0)?;
    req.put_id(region);
    req.put_i16(rect.x);
    req.put_i16(rect.y);
    req.put_i16(rect.width);
    req.put_i16(rect.height);
    Ok(())
}

/// `destination = source1 ∪ source2`.
pub fn union_region(
    queue: &mut RequestQueue,
    destination: Id,
    source1: Id,
    source2: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::UnionRegion, 0)?;
    req.put_id(destination);
    req.put_id(source1);
    req.put_id(source2);
    Ok(())
}

pub fn intersect_region(
    queue: &mut RequestQueue,
    destination: Id,
    source1: Id,
    source2: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::IntersectRegion, 0)?;
    req.put_id(destination);
    req.put_id(source1);
    req.put_id(source2);
    Ok(())
}

pub fn subtract_region(
    queue: &mut RequestQueue,
    destination: Id,
    source1: Id,
    source2: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SubtractRegion, 0)?;
    req.put_id(destination);
    req.put_id(source1);
    req.put_id(source2);
    Ok(())
}

pub fn xor_region(
    queue: &mut RequestQueue,
    destination: Id,
    source1: Id,
    source2: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::XorRegion, 0)?;
    req.put_id(destination);
    req.put_id(source1);
    req.put_id(source2);
    Ok(())
}

pub fn point_in_region(queue: &mut RequestQueue, region: Id, x: i16, y: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::PointInRegion, 0)?;
    req.put_id(region);
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

pub fn rect_in_region(queue: &mut RequestQueue, region: Id, rect: Rect) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::RectInRegion, 0)?;
    req.put_id(region);
    req.put_i16(rect.x);
    req.put_i16(rect.y);
    req.put_i16(rect.width);
    req.put_i16(rect.height);
    Ok(())
}

pub fn empty_region(queue: &mut RequestQueue, region: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::EmptyRegion, 0)?;
    req.put_id(region);
    Ok(())
}

pub fn equal_region(queue: &mut RequestQueue, region1: Id, region2: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::EqualRegion, 0)?;
    req.put_id(region1);
    req.put_id(region2);
    Ok(())
}

pub fn offset_region(queue: &mut RequestQueue, region: Id, dx: i16, dy: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::OffsetRegion, 0)?;
    req.put_id(region);
    req.put_i16(dx);
    req.put_i16(dy);
    Ok(())
}

pub fn get_region_box(queue: &mut RequestQueue, region: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetRegionBox, 0)?;
    req.put_id(region);
    Ok(())
}

/// Creates a region from a polygon outline. `mode` selects the fill
/// rule (even-odd or winding).
pub fn new_polygon_region(
    queue: &mut RequestQueue,
    mode: u16,
    points: &[(i16, i16)],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::NewPolygonRegion, points.len() * 4)?;
    req.put_u16(mode);
    req.skip(2);
    put_points(&mut req, points);
    Ok(())
}

/// Creates a region from the set bits of a monochrome bitmap.
pub fn new_bitmap_region(
    queue: &mut RequestQueue,
    width: i16,
    height: i16,
    bitmap: &[u16],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::NewBitmapRegion, bitmap.len() * 2)?;
    req.put_i16(width);
    req.put_i16(height);
    put_words(&mut req, bitmap);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{Limits, Profile};

    fn queue() -> RequestQueue {
        RequestQueue::new(Profile::STANDARD, Limits::for_testing())
    }

    #[test]
    fn union_region_orders_destination_first() {
        let mut q = queue();
        union_region(&mut q, 10, 11, 12).unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[0..4], &[64, 0, 16, 0]);
        assert_eq!(&bytes[4..8], &10u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &11u32.to_le_bytes());
        assert_eq!(&bytes[12..16], &12u32.to_le_bytes());
    }

    #[test]
    fn new_polygon_region_leaves_pad_zero() {
        let mut q = queue();
        new_polygon_region(&mut q, 1, &[(0, 0), (4, 0), (2, 3)]).unwrap();
        let bytes = q.pending();
        // fixed 8 + 12 point bytes = 20; the count falls out of the length
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 20);
        assert_eq!(&bytes[4..6], &1u16.to_le_bytes());
        assert_eq!(&bytes[6..8], &[0, 0]);
        assert_eq!(&bytes[8..12], &[0, 0, 4, 0]);
    }

    #[test]
    fn rect_in_region_frames_rect() {
        let mut q = queue();
        rect_in_region(&mut q, 2, Rect::new(1, 2, 3, 4)).unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[8..10], &1i16.to_le_bytes());
        assert_eq!(&bytes[14..16], &4i16.to_le_bytes());
    }
}
