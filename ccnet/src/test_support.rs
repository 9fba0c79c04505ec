//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::device::{BillValidator, DeviceBuilder};
use crate::protocol::Frame;
use crate::session::{Event, EventSink};
use crate::transport::MockTransport;
use crate::Result;

/// Reply timeout used by mock-backed validators.
pub const TEST_RESPONSE_TIMEOUT: Duration = Duration::from_millis(150);
/// Poll interval used by mock-backed validators.
pub const TEST_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Event sink that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn on_event(&self, event: &Event) {
        self.events.lock().push(event.clone());
    }
}

/// Build a validator over `mock` with short timeouts, reporting events to
/// `sink`.
#[doc(hidden)]
pub fn mock_validator<S>(mock: &MockTransport, sink: S) -> Result<BillValidator>
where
    S: EventSink + 'static,
{
    DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .response_timeout(TEST_RESPONSE_TIMEOUT)
        .poll_interval(TEST_POLL_INTERVAL)
        .lock_timeout(Duration::from_secs(1))
        .with_event_sink(sink)
        .build()
}

/// Full wire frame for a reply code and data.
#[doc(hidden)]
pub fn reply_frame(code: u8, data: &[u8]) -> Vec<u8> {
    Frame::encode(code, data).unwrap_or_default()
}

/// Same frame with the last CRC byte flipped.
#[doc(hidden)]
pub fn corrupted_frame(code: u8, data: &[u8]) -> Vec<u8> {
    let mut frame = reply_frame(code, data);
    if let Some(last) = frame.last_mut() {
        *last ^= 0xFF;
    }
    frame
}

/// Queue a bare ACK reply.
#[doc(hidden)]
pub fn push_ack(mock: &MockTransport) {
    mock.push_reply(0x00, &[]);
}

/// Queue the replies of one accepted note with escrow enabled: ESCROW
/// (answered by STACK, which the device ACKs), STACKING, then BILL
/// STACKED.
#[doc(hidden)]
pub fn push_accepted_note(mock: &MockTransport, bill_type: u8) {
    mock.push_reply(0x80, &[bill_type]);
    push_ack(mock);
    mock.push_reply(0x17, &[]);
    mock.push_reply(0x81, &[bill_type]);
}
