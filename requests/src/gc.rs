//! Graphics context requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

use crate::{count_u16, count_u32, put_words};

/// Creates a graphics context with server defaults. The new id arrives
/// in the reply.
pub fn new_gc(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::NewGc, 0)?;
    Ok(())
}

/// Duplicates an existing context, attributes included.
pub fn copy_gc(queue: &mut RequestQueue, gc: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CopyGc, 0)?;
    req.put_id(gc);
    Ok(())
}

pub fn get_gc_info(queue: &mut RequestQueue, gc: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetGcInfo, 0)?;
    req.put_id(gc);
    Ok(())
}

pub fn destroy_gc(queue: &mut RequestQueue, gc: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyGc, 0)?;
    req.put_id(gc);
    Ok(())
}

pub fn set_gc_foreground(queue: &mut RequestQueue, gc: Id, color: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcForeground, 0)?;
    req.put_id(gc);
    req.put_u32(color);
    Ok(())
}

pub fn set_gc_background(queue: &mut RequestQueue, gc: Id, color: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcBackground, 0)?;
    req.put_id(gc);
    req.put_u32(color);
    Ok(())
}

/// Like `set_gc_foreground` but with a raw hardware pixel value, no
/// color conversion.
pub fn set_gc_foreground_pixel_val(
    queue: &mut RequestQueue,
    gc: Id,
    pixel: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcForegroundPixelVal, 0)?;
    req.put_id(gc);
    req.put_u32(pixel);
    Ok(())
}

pub fn set_gc_background_pixel_val(
    queue: &mut RequestQueue,
    gc: Id,
    pixel: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcBackgroundPixelVal, 0)?;
    req.put_id(gc);
    req.put_u32(pixel);
    Ok(())
}

pub fn set_gc_use_background(
    queue: &mut RequestQueue,
    gc: Id,
    use_background: bool,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcUseBackground, 0)?;
    req.put_id(gc);
    req.put_u16(u16::from(use_background));
    Ok(())
}

/// Sets the drawing mode (copy, xor, or, and).
pub fn set_gc_mode(queue: &mut RequestQueue, gc: Id, mode: u16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcMode, 0)?;
    req.put_id(gc);
    req.put_u16(mode);
    Ok(())
}

pub fn set_gc_font(queue: &mut RequestQueue, gc: Id, font: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcFont, 0)?;
    req.put_id(gc);
    req.put_id(font);
    Ok(())
}

pub fn set_gc_region(queue: &mut RequestQueue, gc: Id, region: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcRegion, 0)?;
    req.put_id(gc);
    req.put_id(region);
    Ok(())
}

pub fn set_gc_clip_origin(queue: &mut RequestQueue, gc: Id, x: i32, y: i32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcClipOrigin, 0)?;
    req.put_id(gc);
    req.put_i32(x);
    req.put_i32(y);
    Ok(())
}

pub fn set_gc_graphics_exposure(
    queue: &mut RequestQueue,
    gc: Id,
    exposure: bool,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcGraphicsExposure, 0)?;
    req.put_id(gc);
    req.put_u16(u16::from(exposure));
    Ok(())
}

pub fn set_gc_line_attributes(queue: &mut RequestQueue, gc: Id, style: u16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcLineAttributes, 0)?;
    req.put_id(gc);
    req.put_u16(style);
    Ok(())
}

/// Sets the dash pattern for dashed line styles; each byte is a run
/// length, alternating on and off.
pub fn set_gc_dash(queue: &mut RequestQueue, gc: Id, dashes: &[u8]) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcDash, dashes.len())?;
    req.put_id(gc);
    req.put_u16(count_u16(dashes.len()));
    req.put_bytes(dashes);
    Ok(())
}

pub fn set_gc_fill_mode(queue: &mut RequestQueue, gc: Id, mode: u16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcFillMode, 0)?;
    req.put_id(gc);
    req.put_u16(mode);
    Ok(())
}

/// Sets the stipple bitmap used by stippled fill modes. `bitmap` holds
/// one 16-bit word per row fragment.
pub fn set_gc_stipple(
    queue: &mut RequestQueue,
    gc: Id,
    width: i16,
    height: i16,
    bitmap: &[u16],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcStipple, bitmap.len() * 2)?;
    req.put_id(gc);
    req.put_i16(width);
    req.put_i16(height);
    put_words(&mut req, bitmap);
    Ok(())
}

/// Sets the tile/stipple drawing offset.
pub fn set_gc_ts_offset(queue: &mut RequestQueue, gc: Id, x: i16, y: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcTsOffset, 0)?;
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

pub fn set_gc_tile(
    queue: &mut RequestQueue,
    gc: Id,
    pixmap: Id,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetGcTile, 0)?;
    req.put_id(gc);
    req.put_id(pixmap);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

/// Asks the server to measure `text` with the context's font; the
/// metrics arrive in the reply.
pub fn get_gc_text_size(
    queue: &mut RequestQueue,
    gc: Id,
    flags: u32,
    text: &[u8],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetGcTextSize, text.len())?;
    req.put_id(gc);
    req.put_u32(flags);
    req.put_u32(count_u32(text.len()));
    req.put_bytes(text);
    Ok(())
}
