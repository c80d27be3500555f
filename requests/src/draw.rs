//! Drawing primitives.
//!
//! Every primitive names a drawable (window or pixmap) and a graphics
//! context; coordinates are drawable-relative signed 16-bit values.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

use crate::{count_i16, put_points, put_words};

pub fn point(queue: &mut RequestQueue, drawable: Id, gc: Id, x: i16, y: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Point, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

pub fn line(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x1: i16,
    y1: i16,
    x2: i16,
    y2: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Line, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x1);
    req.put_i16(y1);
    req.put_i16(x2);
    req.put_i16(y2);
    Ok(())
}

pub fn rect(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Rect, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

pub fn fill_rect(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::FillRect, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

pub fn ellipse(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    rx: i16,
    ry: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Ellipse, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(rx);
    req.put_i16(ry);
    Ok(())
}

pub fn fill_ellipse(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    rx: i16,
    ry: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::FillEllipse, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(rx);
    req.put_i16(ry);
    Ok(())
}

/// Draws an open polyline through `points`.
pub fn poly(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    points: &[(i16, i16)],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Poly, points.len() * 4)?;
    req.put_id(drawable);
    req.put_id(gc);
    put_points(&mut req, points);
    Ok(())
}

/// Fills the polygon outlined by `points`; the server closes the shape.
pub fn fill_poly(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    points: &[(i16, i16)],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::FillPoly, points.len() * 4)?;
    req.put_id(drawable);
    req.put_id(gc);
    put_points(&mut req, points);
    Ok(())
}

pub fn points(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    points: &[(i16, i16)],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Points, points.len() * 4)?;
    req.put_id(drawable);
    req.put_id(gc);
    put_points(&mut req, points);
    Ok(())
}

/// Draws an arc or pie slice between two endpoint rays. `(ax, ay)` and
/// `(bx, by)` are relative to the center; `arc_type` selects open arc,
/// chord, or pie.
#[allow(clippy::too_many_arguments)]
pub fn arc(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    rx: i16,
    ry: i16,
    ax: i16,
    ay: i16,
    bx: i16,
    by: i16,
    arc_type: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Arc, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(rx);
    req.put_i16(ry);
    req.put_i16(ax);
    req.put_i16(ay);
    req.put_i16(bx);
    req.put_i16(by);
    req.put_i16(arc_type);
    Ok(())
}

/// Arc addressed by start and end angles in 64ths of a degree.
#[allow(clippy::too_many_arguments)]
pub fn arc_angle(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    rx: i16,
    ry: i16,
    angle1: i16,
    angle2: i16,
    arc_type: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ArcAngle, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(rx);
    req.put_i16(ry);
    req.put_i16(angle1);
    req.put_i16(angle2);
    req.put_i16(arc_type);
    Ok(())
}

/// Writes a rectangle of raw pixels. `pixel_type` names the tail's
/// pixel encoding; the server converts to the screen format.
#[allow(clippy::too_many_arguments)]
pub fn area(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    pixel_type: i16,
    pixels: &[u8],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Area, pixels.len())?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_i16(pixel_type);
    req.skip(2);
    req.put_bytes(pixels);
    Ok(())
}

/// Draws a monochrome bitmap in the foreground color, one 16-bit word
/// per row fragment.
#[allow(clippy::too_many_arguments)]
pub fn bitmap(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    bits: &[u16],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Bitmap, bits.len() * 2)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    put_words(&mut req, bits);
    Ok(())
}

/// Draws text at a baseline position. `flags` carries the encoding and
/// alignment bits.
#[allow(clippy::too_many_arguments)]
pub fn text(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    flags: u32,
    text: &[u8],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::Text, text.len())?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(count_i16(text.len()));
    req.skip(2);
    req.put_u32(flags);
    req.put_bytes(text);
    Ok(())
}

/// Asks the server for a rectangle of screen pixels; data arrives in
/// the reply.
pub fn read_area(
    queue: &mut RequestQueue,
    drawable: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ReadArea, 0)?;
    req.put_id(drawable);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

/// Server-side blit from `source` into `drawable`.
#[allow(clippy::too_many_arguments)]
pub fn copy_area(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    source: Id,
    src_x: i16,
    src_y: i16,
    op: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CopyArea, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_id(source);
    req.put_i16(src_x);
    req.put_i16(src_y);
    req.put_u32(op);
    Ok(())
}

/// Blit with scaling: the source rectangle is stretched onto the
/// destination rectangle. Both rectangles are corner pairs, not
/// origin-plus-size.
#[allow(clippy::too_many_arguments)]
pub fn stretch_area(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    dx1: i16,
    dy1: i16,
    dx2: i16,
    dy2: i16,
    source: Id,
    sx1: i16,
    sy1: i16,
    sx2: i16,
    sy2: i16,
    op: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::StretchArea, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(dx1);
    req.put_i16(dy1);
    req.put_i16(dx2);
    req.put_i16(dy2);
    req.put_id(source);
    req.put_i16(sx1);
    req.put_i16(sy1);
    req.put_i16(sx2);
    req.put_i16(sy2);
    req.put_u32(op);
    Ok(())
}
