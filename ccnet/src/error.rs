// ccnet-rs/ccnet/src/error.rs

use thiserror::Error;

use crate::device::DeviceStatus;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// LEN field disagrees with the number of bytes actually received.
    #[error("length mismatch: frame declares {expected} bytes, received {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("payload too large: at most {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("operation timed out")]
    Timeout,

    #[error("failed to open transport: {0}")]
    TransportOpenFailure(String),

    #[error("transport closed")]
    TransportClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Another transaction holds the device.
    #[error("device busy: a transaction is already outstanding")]
    DeviceBusy,

    #[error("device fault: {0}")]
    DeviceFault(DeviceStatus),

    #[error("unknown denomination code {0:#04x}")]
    UnknownDenomination(u8),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("session worker panicked")]
    SessionPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "serial")]
impl From<serialport::Error> for Error {
    fn from(err: serialport::Error) -> Self {
        match err.kind() {
            serialport::ErrorKind::Io(kind) => Error::Io(std::io::Error::new(kind, err.description)),
            _ => Error::TransportOpenFailure(err.description),
        }
    }
}
