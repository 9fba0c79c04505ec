// ccnet-rs/ccnet/src/device/config.rs
//! Device timing configuration

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How long a transaction waits for the reply (ms)
pub const RESPONSE_TIMEOUT_MS: u64 = 2_000;

/// Pause between two poll cycles of an acceptance session (ms)
pub const POLL_INTERVAL_MS: u64 = 200;

/// How long a caller waits for the transaction lock before giving up
/// with DeviceBusy (ms)
pub const LOCK_TIMEOUT_MS: u64 = 5_000;

/// Runtime timing and behaviour knobs of a validator handle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub response_timeout: Duration,
    pub poll_interval: Duration,
    pub lock_timeout: Duration,
    /// Sessions enable escrow so that each recognised note is held for an
    /// accept/reject decision before it reaches the cassette.
    pub escrow: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            response_timeout: Duration::from_millis(RESPONSE_TIMEOUT_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            lock_timeout: Duration::from_millis(LOCK_TIMEOUT_MS),
            escrow: true,
        }
    }
}
