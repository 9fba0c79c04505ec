// ccnet-rs/ccnet/src/protocol/responses/identification.rs

use crate::protocol::parser::{ascii_at, slice_at};
use crate::protocol::responses::Reply;
use crate::types::Identification;
use crate::utils::bytes_to_hex_dashed;
use crate::Result;

const PART_NUMBER: (usize, usize) = (0, 15);
const SERIAL_NUMBER: (usize, usize) = (15, 12);
const ASSET_NUMBER: (usize, usize) = (27, 7);

/// Decode an IDENTIFICATION reply.
///
/// Body layout: part number (15 ASCII bytes), serial number (12 ASCII
/// bytes), asset number (7 binary bytes).
pub fn decode_identification(reply: &Reply) -> Result<Identification> {
    let body = reply.body();
    let part_number = ascii_at(&body, PART_NUMBER.0, PART_NUMBER.1)?;
    let serial_number = ascii_at(&body, SERIAL_NUMBER.0, SERIAL_NUMBER.1)?;
    let asset = slice_at(&body, ASSET_NUMBER.0, ASSET_NUMBER.1)?;
    Ok(Identification {
        part_number,
        serial_number,
        asset_number: bytes_to_hex_dashed(asset),
    })
}
