// ccnet-rs/ccnet/src/protocol/responses/mod.rs

pub mod identification;
pub mod status;

pub use identification::decode_identification;
pub use status::decode_bill_type_status;

/// A decoded reply from the validator. Status and data bytes of replies
/// share the frame layout of outbound commands.
pub type Reply = crate::protocol::Frame;
