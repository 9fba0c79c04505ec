// ccnet-rs/ccnet/src/protocol/commands/bill_types.rs

use crate::constants::{
    ENABLE_BILL_TYPES_PAYLOAD_LEN, NOMINAL_MASK_INDEX, SET_SECURITY_PAYLOAD_LEN,
};
use crate::types::NominalMask;

/// Encode the ENABLE BILL TYPES payload.
///
/// Bytes 0..3 enable bill types, bytes 3..6 enable escrow (hold in escrow
/// until STACK or RETURN). The maskable denominations live in the third
/// byte of each group.
pub fn encode_enable_bill_types(
    enabled: NominalMask,
    escrow: NominalMask,
) -> [u8; ENABLE_BILL_TYPES_PAYLOAD_LEN] {
    let mut out = [0u8; ENABLE_BILL_TYPES_PAYLOAD_LEN];
    out[NOMINAL_MASK_INDEX] = enabled.to_byte();
    out[3 + NOMINAL_MASK_INDEX] = escrow.to_byte();
    out
}

/// Encode the SET SECURITY payload: bill types checked with enhanced
/// verification.
pub fn encode_set_security(mask: NominalMask) -> [u8; SET_SECURITY_PAYLOAD_LEN] {
    let mut out = [0u8; SET_SECURITY_PAYLOAD_LEN];
    out[NOMINAL_MASK_INDEX] = mask.to_byte();
    out
}
