// ccnet-rs/ccnet/src/transport/traits.rs

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use crate::Result;

/// Transport trait abstracts the byte channel away from protocol/device
/// logic. Implementations know nothing about framing or checksums.
pub trait Transport: Send {
    /// Write raw bytes to the device
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Take every byte received since the last call. Returns an empty
    /// vector when nothing is pending.
    fn read_available(&mut self) -> Result<Vec<u8>>;

    /// Register the notifier to fire whenever unread bytes become
    /// available. Replaces any previously registered notifier.
    fn subscribe(&mut self, notifier: DataNotifier);
}

/// Single-slot "bytes are available" signal.
///
/// The slot holds at most one pending wake-up; signals raised while one is
/// already pending are merged into it. Firing never blocks, so it is safe
/// to call from a reader thread or I/O callback.
#[derive(Debug, Clone)]
pub struct DataNotifier {
    tx: SyncSender<()>,
}

impl DataNotifier {
    /// Create a notifier and the receiving end the waiter blocks on.
    pub fn channel() -> (Self, Receiver<()>) {
        let (tx, rx) = mpsc::sync_channel(1);
        (Self { tx }, rx)
    }

    pub fn notify(&self) {
        match self.tx.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => {}
            Err(TrySendError::Disconnected(())) => {
                log::trace!("data notification dropped: no waiter attached");
            }
        }
    }
}
