// ccnet-rs/ccnet/src/session/outcome.rs

use std::fmt;
use std::time::Duration;

use crate::Error;

/// Parameters of one acceptance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRequest {
    /// Stop once the stacked total exceeds this sum.
    pub target_sum: u32,
    /// Stop when no note has been stacked for this long.
    pub timeout: Duration,
}

impl SessionRequest {
    pub fn new(target_sum: u32, timeout: Duration) -> Self {
        Self {
            target_sum,
            timeout,
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    SumReached,
    Timeout,
    Cancelled,
    DeviceFault,
    CommunicationError,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::SumReached => "sum reached",
            TerminationReason::Timeout => "timeout",
            TerminationReason::Cancelled => "cancelled",
            TerminationReason::DeviceFault => "device fault",
            TerminationReason::CommunicationError => "communication error",
        };
        f.write_str(s)
    }
}

/// Result of a finished session.
#[derive(Debug)]
pub struct SessionOutcome {
    pub reason: TerminationReason,
    /// Sum of every note stacked during the session.
    pub total: u32,
    /// The error behind a `DeviceFault` or `CommunicationError` ending.
    pub error: Option<Error>,
}

impl SessionOutcome {
    pub fn is_success(&self) -> bool {
        self.reason == TerminationReason::SumReached
    }
}
