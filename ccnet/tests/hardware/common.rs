#![cfg(feature = "serial")]

//! Shared: helpers for tests against a real validator
//!
//! The port is taken from `CCNET_PORT` (e.g. `/dev/ttyUSB0`). When it is
//! unset, as on CI, `open_validator` returns `Ok(None)`.

use ccnet::transport::SerialConfig;
use ccnet::{BillValidator, DeviceBuilder, LogSink, Result};

pub const PORT_ENV: &str = "CCNET_PORT";

/// Open the validator named by `CCNET_PORT` and run the power-up handshake.
///
/// - Ok(Some(validator)) : port opened and the device answered
/// - Ok(None) : no port configured
/// - Err(e) : the port or the device failed
pub fn open_validator() -> Result<Option<BillValidator>> {
    let Ok(path) = std::env::var(PORT_ENV) else {
        return Ok(None);
    };
    let validator = DeviceBuilder::new()
        .with_serial(&SerialConfig::new(path))?
        .with_event_sink(LogSink)
        .build()?;
    validator.power_up()?;
    Ok(Some(validator))
}
