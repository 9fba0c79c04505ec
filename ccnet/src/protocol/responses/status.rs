// ccnet-rs/ccnet/src/protocol/responses/status.rs

use crate::constants::NOMINAL_MASK_INDEX;
use crate::protocol::parser::byte_at;
use crate::protocol::responses::Reply;
use crate::types::{BillTypeStatus, NominalMask};
use crate::Result;

const ENABLED_GROUP: usize = 0;
const SECURITY_GROUP: usize = 3;

/// Decode a GET STATUS reply.
///
/// The body holds two three-byte groups: enabled bill types, then bill
/// types under enhanced security. Each mask is the third byte of its group.
pub fn decode_bill_type_status(reply: &Reply) -> Result<BillTypeStatus> {
    let body = reply.body();
    let enabled = byte_at(&body, ENABLED_GROUP + NOMINAL_MASK_INDEX)?;
    let security = byte_at(&body, SECURITY_GROUP + NOMINAL_MASK_INDEX)?;
    Ok(BillTypeStatus {
        enabled: NominalMask::from_byte(enabled),
        security: NominalMask::from_byte(security),
    })
}
