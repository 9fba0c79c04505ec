// ccnet-rs/ccnet/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod operations;
pub mod status;
pub mod transaction;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::BillValidator;
pub use status::{denomination, DeviceState, DeviceStatus, FailureKind, RejectReason};
pub use transaction::TransactionEngine;
