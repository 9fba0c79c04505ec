// ccnet-rs/ccnet/src/session/handle.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::session::outcome::SessionOutcome;
use crate::{Error, Result};

/// Handle to a running acceptance session.
///
/// Dropping the handle detaches the session; it keeps running until one of
/// its own termination conditions, or until
/// [BillValidator::stop_session](crate::BillValidator::stop_session).
#[derive(Debug)]
pub struct SessionHandle {
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<SessionOutcome>,
}

impl SessionHandle {
    pub(crate) fn new(cancel: Arc<AtomicBool>, worker: JoinHandle<SessionOutcome>) -> Self {
        Self { cancel, worker }
    }

    /// Request cancellation. Observed at the next poll cycle boundary; a
    /// note already in escrow at that point is returned.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the session has disabled the validator and ended.
    pub fn wait(self) -> Result<SessionOutcome> {
        self.worker.join().map_err(|_| Error::SessionPanicked)
    }
}
