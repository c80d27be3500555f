//! Cursor requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

use crate::put_words;

/// Creates a two-color cursor from foreground and background bitmaps,
/// both `width` x `height` with one 16-bit word per row fragment. The
/// cursor id arrives in the reply.
#[allow(clippy::too_many_arguments)]
pub fn new_cursor(
    queue: &mut RequestQueue,
    width: i16,
    height: i16,
    hot_x: i16,
    hot_y: i16,
    fg_color: u32,
    bg_color: u32,
    fg_bitmap: &[u16],
    bg_bitmap: &[u16],
) -> QueueResult<()> {
    debug_assert_eq!(fg_bitmap.len(), bg_bitmap.len());
    let extra = (fg_bitmap.len() + bg_bitmap.len()) * 2;
    let mut req = queue.allocate(Opcode::NewCursor, extra)?;
    req.put_i16(width);
    req.put_i16(height);
    req.put_i16(hot_x);
    req.put_i16(hot_y);
    req.put_u32(fg_color);
    req.put_u32(bg_color);
    put_words(&mut req, fg_bitmap);
    put_words(&mut req, bg_bitmap);
    Ok(())
}

/// Warps the pointer to absolute screen coordinates.
pub fn move_cursor(queue: &mut RequestQueue, x: i16, y: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::MoveCursor, 0)?;
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

pub fn destroy_cursor(queue: &mut RequestQueue, cursor: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyCursor, 0)?;
    req.put_id(cursor);
    Ok(())
}

pub fn set_window_cursor(queue: &mut RequestQueue, window: Id, cursor: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetWindowCursor, 0)?;
    req.put_id(window);
    req.put_id(cursor);
    Ok(())
}
