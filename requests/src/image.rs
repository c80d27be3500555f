//! Pixmap and image requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

use crate::count_u32;

/// Creates an offscreen pixmap. `format` selects the pixel format, 0
/// for the screen's native one.
pub fn new_pixmap_ex(
    queue: &mut RequestQueue,
    width: i16,
    height: i16,
    format: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::NewPixmapEx, 0)?;
    req.put_i16(width);
    req.put_i16(height);
    req.put_u32(format);
    Ok(())
}

/// Decodes an image file on the server and draws it scaled into the
/// rectangle. The NUL-terminated path travels in the tail; it names a
/// file on the server's filesystem.
#[allow(clippy::too_many_arguments)]
pub fn draw_image_from_file(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    flags: Id,
    path: &str,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DrawImageFromFile, path.len() + 1)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_id(flags);
    req.put_bytes(path.as_bytes());
    req.put_u8(0);
    Ok(())
}

/// Loads an image file into a server-side image resource without
/// drawing it; the image id arrives in the reply.
pub fn load_image_from_file(queue: &mut RequestQueue, flags: i16, path: &str) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::LoadImageFromFile, path.len() + 1)?;
    req.put_i16(flags);
    req.skip(2);
    req.put_bytes(path.as_bytes());
    req.put_u8(0);
    Ok(())
}

/// Draws a loaded image scaled to the rectangle.
#[allow(clippy::too_many_arguments)]
pub fn draw_image_to_fit(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    image: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DrawImageToFit, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_id(image);
    Ok(())
}

/// Draws a sub-rectangle of a loaded image scaled onto a destination
/// rectangle.
#[allow(clippy::too_many_arguments)]
pub fn draw_image_part_to_fit(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    dst_x: i16,
    dst_y: i16,
    dst_width: i16,
    dst_height: i16,
    src_x: i16,
    src_y: i16,
    src_width: i16,
    src_height: i16,
    image: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DrawImagePartToFit, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(dst_x);
    req.put_i16(dst_y);
    req.put_i16(dst_width);
    req.put_i16(dst_height);
    req.put_i16(src_x);
    req.put_i16(src_y);
    req.put_i16(src_width);
    req.put_i16(src_height);
    req.put_id(image);
    Ok(())
}

pub fn free_image(queue: &mut RequestQueue, image: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::FreeImage, 0)?;
    req.put_id(image);
    Ok(())
}

pub fn get_image_info(queue: &mut RequestQueue, image: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetImageInfo, 0)?;
    req.put_id(image);
    Ok(())
}

/// Draws client-held image data directly. The fields after the
/// position mirror the client-side image header; the tail carries the
/// pixel rows at the stated pitch followed by the optional palette.
#[allow(clippy::too_many_arguments)]
pub fn draw_image_bits(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    flags: i16,
    width: i16,
    height: i16,
    planes: i16,
    bpp: i16,
    palette_size: i16,
    data_format: u32,
    pitch: u32,
    transparent_color: u32,
    data: &[u8],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DrawImageBits, data.len())?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(flags);
    req.put_i16(width);
    req.put_i16(height);
    req.put_i16(planes);
    req.put_i16(bpp);
    req.put_i16(palette_size);
    req.put_u32(data_format);
    req.put_u32(pitch);
    req.put_u32(transparent_color);
    req.put_bytes(data);
    Ok(())
}

/// Reserves a server-side buffer for chunked image transfer; the
/// buffer id arrives in the reply.
pub fn image_buffer_alloc(queue: &mut RequestQueue, size: u32) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ImageBufferAlloc, 0)?;
    req.put_u32(size);
    Ok(())
}

/// Appends one chunk to a server-side image buffer. Large images are
/// sent as a sequence of these, each sized under the request limit.
pub fn image_buffer_send(queue: &mut RequestQueue, buffer: u32, data: &[u8]) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ImageBufferSend, data.len())?;
    req.put_u32(buffer);
    req.put_u32(count_u32(data.len()));
    req.put_bytes(data);
    Ok(())
}

/// Decodes a fully transferred image buffer into an image resource.
pub fn load_image_from_buffer(queue: &mut RequestQueue, buffer: u32, flags: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::LoadImageFromBuffer, 0)?;
    req.put_u32(buffer);
    req.put_i16(flags);
    Ok(())
}

/// Decodes and draws an image buffer in one request.
#[allow(clippy::too_many_arguments)]
pub fn draw_image_from_buffer(
    queue: &mut RequestQueue,
    drawable: Id,
    gc: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    buffer: u32,
    flags: Id,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DrawImageFromBuffer, 0)?;
    req.put_id(drawable);
    req.put_id(gc);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_u32(buffer);
    req.put_id(flags);
    Ok(())
}
