// ccnet-rs/ccnet/src/lib.rs

//! ccnet
//!
//! Pure Rust driver for bill validators speaking the CCNET serial
//! protocol: framing and CRC, a request/response transaction engine,
//! device status interpretation and acceptance sessions that collect a
//! target sum of banknotes.

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
