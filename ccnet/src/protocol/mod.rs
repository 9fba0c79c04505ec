// ccnet-rs/ccnet/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::crc16;
pub use commands::Command;
pub use frame::Frame;
pub use responses::Reply;
