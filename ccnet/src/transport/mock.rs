// ccnet-rs/ccnet/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use crate::constants::{ACK_CODE, CODE_INDEX, FRAME_OVERHEAD, NAK_CODE};
use crate::protocol::Frame;
use crate::transport::traits::{DataNotifier, Transport};
use crate::{Error, Result};

/// What the scripted device does when it receives the next command frame.
#[derive(Debug, Clone)]
enum MockReply {
    Bytes(Vec<u8>),
    /// Deliver the chunks one after another with a gap between them.
    Chunks(Vec<Vec<u8>>, Duration),
    Silence,
}

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    replies: VecDeque<MockReply>,
    pending: Vec<u8>,
    notifier: Option<DataNotifier>,
    write_failures: usize,
}

impl MockState {
    fn deliver(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        if let Some(n) = &self.notifier {
            n.notify();
        }
    }
}

/// Mock transport for tests: a scripted validator.
///
/// Every written frame is recorded. Each frame other than ACK/NAK consumes
/// the next queued reply, which is made available immediately and
/// signalled through the subscribed notifier. Clones share state, so a
/// test can keep a handle after moving the transport into a device.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply frame built from a status/command code and data.
    pub fn push_reply(&self, code: u8, data: &[u8]) {
        // Test replies always fit a short frame; encode can't fail here.
        let frame = Frame::encode(code, data).unwrap_or_default();
        self.push_frame(frame);
    }

    /// Queue raw reply bytes exactly as they should appear on the wire.
    pub fn push_frame(&self, bytes: Vec<u8>) {
        self.state.lock().replies.push_back(MockReply::Bytes(bytes));
    }

    /// Queue a reply delivered in several chunks `gap` apart.
    pub fn push_chunks(&self, chunks: Vec<Vec<u8>>, gap: Duration) {
        self.state
            .lock()
            .replies
            .push_back(MockReply::Chunks(chunks, gap));
    }

    /// Queue a command the device will not answer.
    pub fn push_silence(&self) {
        self.state.lock().replies.push_back(MockReply::Silence);
    }

    /// Make the next `n` writes fail with an I/O error.
    pub fn set_write_failures(&self, n: usize) {
        self.state.lock().write_failures = n;
    }

    /// Inject bytes as if they arrived unsolicited.
    pub fn inject(&self, bytes: &[u8]) {
        self.state.lock().deliver(bytes);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().sent.clone()
    }

    /// Code byte of every frame written so far.
    pub fn sent_codes(&self) -> Vec<u8> {
        self.state
            .lock()
            .sent
            .iter()
            .filter_map(|f| f.get(CODE_INDEX).copied())
            .collect()
    }

    pub fn clear_sent(&self) {
        self.state.lock().sent.clear();
    }

    pub fn pending_replies(&self) -> usize {
        self.state.lock().replies.len()
    }

    fn is_control_frame(data: &[u8]) -> bool {
        data.len() == FRAME_OVERHEAD
            && matches!(data.get(CODE_INDEX), Some(&ACK_CODE) | Some(&NAK_CODE))
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock();
        if state.write_failures > 0 {
            state.write_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "simulated write failure",
            )));
        }
        state.sent.push(data.to_vec());

        if Self::is_control_frame(data) {
            return Ok(());
        }

        match state.replies.pop_front() {
            Some(MockReply::Bytes(bytes)) => state.deliver(&bytes),
            Some(MockReply::Chunks(chunks, gap)) => {
                let shared = Arc::clone(&self.state);
                thread::spawn(move || {
                    for chunk in chunks {
                        thread::sleep(gap);
                        shared.lock().deliver(&chunk);
                    }
                });
            }
            Some(MockReply::Silence) | None => {}
        }
        Ok(())
    }

    fn read_available(&mut self) -> Result<Vec<u8>> {
        Ok(std::mem::take(&mut self.state.lock().pending))
    }

    fn subscribe(&mut self, notifier: DataNotifier) {
        self.state.lock().notifier = Some(notifier);
    }
}
