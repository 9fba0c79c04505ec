// ccnet-rs/ccnet/src/session/events.rs

use std::fmt;
use std::sync::mpsc;
use std::time::Duration;

use crate::device::DeviceStatus;
use crate::session::outcome::TerminationReason;
use crate::types::Denomination;

/// Why a fault event was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The device reported an error state.
    Device(DeviceStatus),
    /// The exchange itself failed (timeout, corrupted reply, I/O).
    Communication(String),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Device(status) => write!(f, "{}", status),
            Fault::Communication(msg) => write!(f, "communication error: {}", msg),
        }
    }
}

/// Consumer-facing notification raised by the device or a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DeviceFault(Fault),
    BillAccepted(Denomination),
    BillRejected { reason: String },
    /// Sum of the notes stacked so far in the session.
    RunningTotal(u32),
    SessionEnded(TerminationReason),
    CassetteRemoved,
    CassetteReinstalled,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::DeviceFault(fault) => write!(f, "device fault: {}", fault),
            Event::BillAccepted(d) => write!(f, "bill accepted: {}", d),
            Event::BillRejected { reason } => write!(f, "bill rejected: {}", reason),
            Event::RunningTotal(total) => write!(f, "running total: {}", total),
            Event::SessionEnded(reason) => write!(f, "session ended: {}", reason),
            Event::CassetteRemoved => f.write_str("cassette removed"),
            Event::CassetteReinstalled => f.write_str("cassette reinstalled"),
        }
    }
}

/// Receiver of device and session events.
///
/// Called on the thread that observed the event (the session worker or the
/// caller of a control operation) while the device lock is held, so it
/// must not call back into the validator.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &Event);
}

impl<F> EventSink for F
where
    F: Fn(&Event) + Send + Sync,
{
    fn on_event(&self, event: &Event) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&self, _event: &Event) {}
}

/// Writes every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&self, event: &Event) {
        match event {
            Event::DeviceFault(_) | Event::CassetteRemoved => log::warn!("{}", event),
            _ => log::info!("{}", event),
        }
    }
}

/// Forwards events into a queue read through [EventReceiver].
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Event>,
}

impl ChannelSink {
    pub fn new() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, EventReceiver::new(rx))
    }
}

impl EventSink for ChannelSink {
    fn on_event(&self, event: &Event) {
        if self.tx.send(event.clone()).is_err() {
            log::trace!("event dropped, receiver gone: {}", event);
        }
    }
}

/// Queue of events produced by a [ChannelSink].
#[derive(Debug)]
pub struct EventReceiver(mpsc::Receiver<Event>);

impl EventReceiver {
    pub fn new(queue: mpsc::Receiver<Event>) -> Self {
        Self(queue)
    }

    /// Wait up to `timeout` for the next event.
    pub fn pop_event(&self, timeout: Duration) -> Option<Event> {
        self.0.recv_timeout(timeout).ok()
    }

    /// Take every event queued so far without waiting.
    pub fn drain(&self) -> Vec<Event> {
        self.0.try_iter().collect()
    }
}
