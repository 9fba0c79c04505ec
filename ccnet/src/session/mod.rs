// ccnet-rs/ccnet/src/session/mod.rs
//! Acceptance sessions: a worker that polls the validator, resolves
//! escrowed notes and keeps a running total until a target sum, an idle
//! timeout, a cancellation or a fault ends it.

pub(crate) mod controller;
pub mod decision;
pub mod events;
pub mod handle;
pub mod outcome;

pub use decision::{AcceptAll, EscrowDecider, EscrowDecision};
pub use events::{ChannelSink, Event, EventReceiver, EventSink, Fault, LogSink, NullSink};
pub use handle::SessionHandle;
pub use outcome::{SessionOutcome, SessionRequest, TerminationReason};
