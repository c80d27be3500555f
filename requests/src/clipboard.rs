//! Selection ownership and client-to-client data transfer.

use reqbuf::{QueueResult, RequestQueue};
use wire::{Id, Opcode};

/// Claims the selection for `window`. `type_list` is the NUL-terminated
/// space-separated list of mime types the owner can serve.
pub fn set_selection_owner(
    queue: &mut RequestQueue,
    window: Id,
    type_list: &str,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SetSelectionOwner, type_list.len() + 1)?;
    req.put_id(window);
    req.put_bytes(type_list.as_bytes());
    req.put_u8(0);
    Ok(())
}

pub fn get_selection_owner(queue: &mut RequestQueue) -> QueueResult<()> {
    queue.allocate(Opcode::GetSelectionOwner, 0)?;
    Ok(())
}

/// Asks the selection owner to deliver its data in the given mime type.
/// `serial` correlates the eventual client-data events with this
/// request.
pub fn request_client_data(
    queue: &mut RequestQueue,
    window: Id,
    owner: Id,
    serial: u32,
    mime_type: u16,
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::RequestClientData, 0)?;
    req.put_id(window);
    req.put_id(owner);
    req.put_u32(serial);
    req.put_u16(mime_type);
    Ok(())
}

/// Delivers one chunk of selection data to a requestor. `total_len` is
/// the full transfer size; chunks carry their own length implicitly.
pub fn send_client_data(
    queue: &mut RequestQueue,
    window: Id,
    destination: Id,
    serial: u32,
    total_len: u32,
    data: &[u8],
) -> QueueResult<()> {
    let mut req = queue.allocate(Opcode::SendClientData, data.len())?;
    req.put_id(window);
    req.put_id(destination);
    req.put_u32(serial);
    req.put_u32(total_len);
    req.put_bytes(data);
    Ok(())
}
