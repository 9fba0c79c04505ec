// ccnet-rs/ccnet/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "serial")]
pub mod serial;

pub use mock::MockTransport;
pub use traits::{DataNotifier, Transport};
#[cfg(feature = "serial")]
pub use serial::{SerialConfig, SerialTransport};
