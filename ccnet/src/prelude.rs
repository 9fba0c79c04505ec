// ccnet-rs/ccnet/src/prelude.rs

pub use crate::device::{
    BillValidator, DeviceBuilder, DeviceConfig, DeviceState, DeviceStatus, FailureKind,
    RejectReason,
};
pub use crate::protocol::{Command, Frame, Reply};
pub use crate::session::{
    AcceptAll, ChannelSink, EscrowDecider, EscrowDecision, Event, EventReceiver, EventSink, Fault,
    LogSink, NullSink, SessionHandle, SessionOutcome, SessionRequest, TerminationReason,
};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "serial")]
pub use crate::transport::{SerialConfig, SerialTransport};
pub use crate::{
    BillTypeStatus, CassetteStatus, Denomination, Error, Identification, NominalMask, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
