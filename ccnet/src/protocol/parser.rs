// ccnet-rs/ccnet/src/protocol/parser.rs

use crate::constants::ACK_CODE;
use crate::protocol::Frame;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read an ASCII field and strip the space padding on the right.
/// Non-ASCII bytes are replaced rather than rejected.
pub fn ascii_at(data: &[u8], idx: usize, len: usize) -> Result<String> {
    let s = slice_at(data, idx, len)?;
    let text: String = s
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();
    Ok(text.trim_end_matches([' ', '\0']).to_string())
}

/// Ensure the reply is a bare ACK. Returns UnexpectedResponse otherwise.
pub fn expect_ack(reply: &Frame) -> Result<()> {
    if !reply.is_ack() {
        return Err(Error::UnexpectedResponse {
            expected: ACK_CODE,
            actual: reply.code,
        });
    }
    Ok(())
}
