//! Window creation, placement, and window-manager requests.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

/// Creates a window under `parent`. The window exists but stays
/// invisible until mapped.
#[allow(clippy::too_many_arguments)]
pub fn new_window(
    queue: &mut RequestQueue,
    parent: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    background: u32,
    border_color: u32,
    border_size: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::NewWindow, 0)?;
    req.put_id(parent);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_u32(background);
    req.put_u32(border_color);
    req.put_i16(border_size);
    Ok(())
}

/// Creates an invisible input-only window that receives events for its
/// rectangle without drawing anything.
pub fn new_input_window(
    queue: &mut RequestQueue,
    parent: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::NewInputWindow, 0)?;
    req.put_id(parent);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

pub fn destroy_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::DestroyWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn map_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::MapWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn unmap_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::UnmapWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn raise_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::RaiseWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn lower_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::LowerWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn move_window(queue: &mut RequestQueue, window: Id, x: i16, y: i16) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::MoveWindow, 0)?;
    req.put_id(window);
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

pub fn resize_window(
    queue: &mut RequestQueue,
    window: Id,
    width: i16,
    height: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ResizeWindow, 0)?;
    req.put_id(window);
    req.put_i16(width);
    req.put_i16(height);
    Ok(())
}

pub fn get_window_info(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetWindowInfo, 0)?;
    req.put_id(window);
    Ok(())
}

/// Moves `window` under a new parent at the given parent-relative
/// position.
pub fn reparent_window(
    queue: &mut RequestQueue,
    window: Id,
    parent: Id,
    x: i16,
    y: i16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ReparentWindow, 0)?;
    req.put_id(window);
    req.put_id(parent);
    req.put_i16(x);
    req.put_i16(y);
    Ok(())
}

/// Asks the window manager to close the window gracefully, giving the
/// owning client a chance to shut down.
pub fn close_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::CloseWindow, 0)?;
    req.put_id(window);
    Ok(())
}

/// Forcibly disconnects the client owning `window`.
pub fn kill_window(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::KillWindow, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn set_focus(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetFocus, 0)?;
    req.put_id(window);
    Ok(())
}

pub fn get_focus(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetFocus, 0)?;
    Ok(())
}

/// Clears a window rectangle to its background; zero width or height
/// extends to the window edge. `expose` asks the server to deliver an
/// exposure event for the cleared area.
pub fn clear_area(
    queue: &mut RequestQueue,
    window: Id,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    expose: bool,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::ClearArea, 0)?;
    req.put_id(window);
    req.put_i16(x);
    req.put_i16(y);
    req.put_i16(width);
    req.put_i16(height);
    req.put_u16(u16::from(expose));
    Ok(())
}

pub fn set_background_pixmap(
    queue: &mut RequestQueue,
    window: Id,
    pixmap: Id,
    flags: u32,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetBackgroundPixmap, 0)?;
    req.put_id(window);
    req.put_id(pixmap);
    req.put_u32(flags);
    Ok(())
}

/// Clips the window's visible shape (or its input shape, per
/// `region_type`) to a region.
pub fn set_window_region(
    queue: &mut RequestQueue,
    window: Id,
    region: Id,
    region_type: u16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetWindowRegion, 0)?;
    req.put_id(window);
    req.put_id(region);
    req.put_u16(region_type);
    Ok(())
}

pub fn query_tree(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::QueryTree, 0)?;
    req.put_id(window);
    Ok(())
}

/// Sets window-manager properties. `flags` says which properties are
/// being changed, `props` carries the decoration and behavior bits, and
/// the NUL-terminated title travels in the tail.
pub fn set_wm_properties(
    queue: &mut RequestQueue,
    window: Id,
    flags: u32,
    props: u32,
    title: &str,
) -> QueueResult<()> {
    let extra = 4 + 4 + title.len() + 1;
    let mut req = queue.allocate(Opcode::SetWmProperties, extra)?;
    req.put_id(window);
    req.put_u32(flags);
    req.put_u32(props);
    req.put_bytes(title.as_bytes());
    req.put_u8(0);
    Ok(())
}

pub fn get_wm_properties(queue: &mut RequestQueue, window: Id) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::GetWmProperties, 0)?;
    req.put_id(window);
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
    fn new_window_frames_all_fields() {
        let mut q = queue();
        new_window(&mut q, 1, 10, 20, 300, 200, 0x00FF_FFFF, 0, 1).unwrap();
        let bytes = q.pending();
        assert_eq!(bytes.len(), 28);
        assert_eq!(&bytes[0..4], &[3, 0, 26, 0]);
        assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
        assert_eq!(&bytes[8..10], &10i16.to_le_bytes());
        assert_eq!(&bytes[16..20], &0x00FF_FFFFu32.to_le_bytes());
        assert_eq!(&bytes[24..26], &1i16.to_le_bytes());
        // Two pad bytes after the unaligned total of 26
        assert_eq!(&bytes[26..28], &[0, 0]);
    }

    #[test]
    fn clear_area_encodes_expose_flag() {
        let mut q = queue();
        clear_area(&mut q, 7, 0, 0, 0, 0, true).unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[16..18], &1u16.to_le_bytes());
    }

    #[test]
    fn set_wm_properties_appends_nul_terminated_title() {
        let mut q = queue();
        set_wm_properties(&mut q, 5, 0x3, 0x10, "demo").unwrap();
        let bytes = q.pending();
        // header + id + flags + props + "demo\0" = 21, padded to 24
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 21);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[16..21], b"demo\0");
    }

    #[test]
    fn reparent_orders_window_before_parent() {
        let mut q = queue();
        reparent_window(&mut q, 9, 2, -5, 6).unwrap();
        let bytes = q.pending();
        assert_eq!(&bytes[4..8], &9u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &2u32.to_le_bytes());
        assert_eq!(&bytes[12..14], &(-5i16).to_le_bytes());
    }
}
