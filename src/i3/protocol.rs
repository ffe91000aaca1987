//! i3 IPC message framing.
//!
//! Every message, in both directions, is
//!
//! ```text
//! "i3-ipc" | payload length: u32 | message type: u32 | payload
//! ```
//!
//! with both integers in native byte order.

use std::io::{Read, Write};

/// Magic string that starts every message.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

/// Size of the fixed header (magic + length + type).
pub const HEADER_LEN: usize = MAGIC.len() + 8;

/// Largest payload accepted in a reply.  Workspace lists are a few KiB.
pub const MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Message types used by workspacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageType {
    RunCommand = 0,
    GetWorkspaces = 1,
}

/// Framing errors.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad magic in reply header")]
    BadMagic,
    #[error("expected reply type {expected}, got {actual}")]
    UnexpectedType { expected: u32, actual: u32 },
    #[error("payload too large: {0} bytes")]
    TooLarge(usize),
}

/// Encode one message.
pub fn encode(kind: MessageType, payload: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    let len = u32::try_from(payload.len()).map_err(|_| ProtocolError::TooLarge(payload.len()))?;
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&len.to_ne_bytes());
    buf.extend_from_slice(&(kind as u32).to_ne_bytes());
    buf.extend_from_slice(payload);
    Ok(buf)
}

/// Write one message to `w`.
pub fn write_message<W: Write>(
    w: &mut W,
    kind: MessageType,
    payload: &[u8],
) -> Result<(), ProtocolError> {
    w.write_all(&encode(kind, payload)?)?;
    w.flush()?;
    Ok(())
}

/// Read one message from `r` and return its type and payload.
pub fn read_message<R: Read>(r: &mut R) -> Result<(u32, Vec<u8>), ProtocolError> {
    let mut header = [0u8; HEADER_LEN];
    r.read_exact(&mut header)?;
    if &header[..MAGIC.len()] != MAGIC {
        return Err(ProtocolError::BadMagic);
    }
    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]) as usize;
    let kind = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);
    if len > MAX_PAYLOAD {
        return Err(ProtocolError::TooLarge(len));
    }
    let mut payload = vec![0u8; len];
    r.read_exact(&mut payload)?;
    Ok((kind, payload))
}

/// Read the reply to a request of type `kind`.
pub fn read_reply<R: Read>(r: &mut R, kind: MessageType) -> Result<Vec<u8>, ProtocolError> {
    let (actual, payload) = read_message(r)?;
    if actual != kind as u32 {
        return Err(ProtocolError::UnexpectedType {
            expected: kind as u32,
            actual,
        });
    }
    Ok(payload)
}
