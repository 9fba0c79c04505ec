// ccnet-rs/ccnet/src/device/handle.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::{Mutex, MutexGuard};

use crate::device::config::DeviceConfig;
use crate::device::operations;
use crate::device::status::{DeviceState, DeviceStatus};
use crate::device::transaction::TransactionEngine;
use crate::session::controller::SessionController;
use crate::session::{AcceptAll, EscrowDecider, Event, EventSink, SessionHandle, SessionRequest};
use crate::transport::Transport;
use crate::types::{BillTypeStatus, CassetteStatus, Identification, NominalMask};
use crate::{Error, Result};

/// State shared by every clone of a validator handle and its session
/// worker.
pub(crate) struct Shared {
    engine: Mutex<TransactionEngine>,
    pub(crate) config: DeviceConfig,
    sink: Arc<dyn EventSink>,
    cassette: Mutex<CassetteStatus>,
    /// Cancel flag of the running session, if any.
    session: Mutex<Option<Arc<AtomicBool>>>,
}

impl Shared {
    /// Acquire the transaction lock, giving up after the configured lock
    /// timeout.
    pub(crate) fn lock_engine(&self) -> Result<MutexGuard<'_, TransactionEngine>> {
        self.engine
            .try_lock_for(self.config.lock_timeout)
            .ok_or(Error::DeviceBusy)
    }

    pub(crate) fn emit(&self, event: Event) {
        self.sink.on_event(&event);
    }

    /// Track the cassette across polls and raise removed/reinstalled
    /// events on the transitions.
    pub(crate) fn observe(&self, status: &DeviceStatus) {
        let event = {
            let mut cassette = self.cassette.lock();
            match (status.state(), *cassette) {
                (DeviceState::CassetteOut, CassetteStatus::InPlace) => {
                    *cassette = CassetteStatus::Removed;
                    Event::CassetteRemoved
                }
                (DeviceState::Initialize | DeviceState::Idling, CassetteStatus::Removed) => {
                    *cassette = CassetteStatus::InPlace;
                    Event::CassetteReinstalled
                }
                _ => return,
            }
        };
        // The sink may read the cassette status back.
        self.emit(event);
    }

    /// Free the session slot so a new session can start.
    pub(crate) fn finish_session(&self) {
        *self.session.lock() = None;
    }
}

/// Handle to one bill validator.
///
/// Cheap to clone; every clone drives the same device. Control operations
/// and the session worker are serialised behind a single transaction lock,
/// so an operation issued while a session is polling waits for the current
/// poll cycle and fails with [Error::DeviceBusy] if that takes longer than
/// the lock timeout.
#[derive(Clone)]
pub struct BillValidator {
    shared: Arc<Shared>,
}

impl BillValidator {
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        config: DeviceConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let engine = TransactionEngine::new(transport, config.response_timeout);
        Self {
            shared: Arc::new(Shared {
                engine: Mutex::new(engine),
                config,
                sink,
                cassette: Mutex::new(CassetteStatus::default()),
                session: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.shared.config
    }

    /// Cassette position as of the last poll.
    pub fn cassette_status(&self) -> CassetteStatus {
        *self.shared.cassette.lock()
    }

    pub fn reset(&self) -> Result<()> {
        operations::reset(&mut *self.shared.lock_engine()?)
    }

    /// Poll once. The reply is returned as is; acknowledging it is up to
    /// the caller.
    pub fn poll(&self) -> Result<DeviceStatus> {
        let status = operations::poll(&mut *self.shared.lock_engine()?)?;
        self.shared.observe(&status);
        Ok(status)
    }

    pub fn get_status(&self) -> Result<BillTypeStatus> {
        operations::get_status(&mut *self.shared.lock_engine()?)
    }

    pub fn identification(&self) -> Result<Identification> {
        operations::identification(&mut *self.shared.lock_engine()?)
    }

    pub fn enable_bill_types(&self, enabled: NominalMask) -> Result<()> {
        operations::enable_bill_types(&mut *self.shared.lock_engine()?, enabled)
    }

    pub fn enable_bill_types_with_escrow(
        &self,
        enabled: NominalMask,
        escrow: NominalMask,
    ) -> Result<()> {
        operations::enable_bill_types_with_escrow(
            &mut *self.shared.lock_engine()?,
            enabled,
            escrow,
        )
    }

    /// Enable every maskable denomination.
    pub fn enable(&self) -> Result<()> {
        self.enable_bill_types(NominalMask::all())
    }

    pub fn disable(&self) -> Result<()> {
        operations::disable(&mut *self.shared.lock_engine()?)
    }

    pub fn set_security(&self, mask: NominalMask) -> Result<()> {
        operations::set_security(&mut *self.shared.lock_engine()?, mask)
    }

    pub fn stack(&self) -> Result<()> {
        operations::stack(&mut *self.shared.lock_engine()?)
    }

    pub fn return_bill(&self) -> Result<()> {
        operations::return_bill(&mut *self.shared.lock_engine()?)
    }

    pub fn hold(&self) -> Result<()> {
        operations::hold(&mut *self.shared.lock_engine()?)
    }

    pub fn send_ack(&self) -> Result<()> {
        self.shared.lock_engine()?.send_ack()
    }

    pub fn send_nak(&self) -> Result<()> {
        self.shared.lock_engine()?.send_nak()
    }

    /// Run the startup handshake (RESET, POLL, POLL) under one lock.
    pub fn power_up(&self) -> Result<DeviceStatus> {
        let mut engine = self.shared.lock_engine()?;
        let status = operations::power_up(&mut engine)?;
        self.shared.observe(&status);
        Ok(status)
    }

    pub fn is_session_active(&self) -> bool {
        self.shared.session.lock().is_some()
    }

    /// Start an acceptance session that stacks every recognised note.
    ///
    /// Returns `Ok(None)` when a session is already running.
    pub fn start_session(&self, request: SessionRequest) -> Result<Option<SessionHandle>> {
        self.start_session_with(request, AcceptAll)
    }

    /// Start an acceptance session that asks `decider` about each escrowed
    /// note.
    pub fn start_session_with<D>(
        &self,
        request: SessionRequest,
        decider: D,
    ) -> Result<Option<SessionHandle>>
    where
        D: EscrowDecider + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        {
            let mut slot = self.shared.session.lock();
            if slot.is_some() {
                log::debug!("session already active, not starting another");
                return Ok(None);
            }
            *slot = Some(Arc::clone(&cancel));
        }

        let controller = SessionController::new(
            Arc::clone(&self.shared),
            request,
            Box::new(decider),
            Arc::clone(&cancel),
        );
        let spawned = thread::Builder::new()
            .name("ccnet-session".into())
            .spawn(move || controller.run());

        match spawned {
            Ok(worker) => Ok(Some(SessionHandle::new(cancel, worker))),
            Err(err) => {
                self.shared.finish_session();
                Err(Error::Io(err))
            }
        }
    }

    /// Ask the running session to stop at the end of its current poll
    /// cycle. Returns false when no session is running.
    pub fn stop_session(&self) -> bool {
        match self.shared.session.lock().as_ref() {
            Some(cancel) => {
                log::info!("session stop requested");
                cancel.store(true, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for BillValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillValidator")
            .field("config", &self.shared.config)
            .field("cassette", &self.cassette_status())
            .field("session_active", &self.is_session_active())
            .finish()
    }
}
