// ccnet-rs/ccnet/src/session/controller.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::device::handle::Shared;
use crate::device::operations;
use crate::device::status::{denomination, DeviceState, DeviceStatus};
use crate::device::transaction::TransactionEngine;
use crate::session::decision::{EscrowDecider, EscrowDecision};
use crate::session::events::{Event, Fault};
use crate::session::outcome::{SessionOutcome, SessionRequest, TerminationReason};
use crate::types::NominalMask;
use crate::utils::Deadline;
use crate::{Error, Result};

/// Result of one poll cycle.
enum Step {
    Continue,
    Stop(TerminationReason, Option<Error>),
}

/// The poll loop of one acceptance session. Runs on the session worker.
pub(crate) struct SessionController {
    shared: Arc<Shared>,
    request: SessionRequest,
    decider: Box<dyn EscrowDecider>,
    cancel: Arc<AtomicBool>,
    total: u32,
}

impl SessionController {
    pub(crate) fn new(
        shared: Arc<Shared>,
        request: SessionRequest,
        decider: Box<dyn EscrowDecider>,
        cancel: Arc<AtomicBool>,
    ) -> Self {
        Self {
            shared,
            request,
            decider,
            cancel,
            total: 0,
        }
    }

    /// Enable, poll until a termination condition, then always disable and
    /// free the session slot before reporting the end of the session.
    pub(crate) fn run(mut self) -> SessionOutcome {
        log::info!(
            "session started: target {}, idle timeout {:?}",
            self.request.target_sum,
            self.request.timeout
        );

        let mut teardown = Teardown::new(Arc::clone(&self.shared));

        let (reason, error) = match self.enable() {
            Ok(()) => self.poll_loop(),
            Err(err) => {
                self.report_communication(&err);
                (TerminationReason::CommunicationError, Some(err))
            }
        };

        disable(&self.shared);
        self.shared.finish_session();
        teardown.disarm();
        self.shared.emit(Event::SessionEnded(reason));
        log::info!("session ended: {} (total {})", reason, self.total);

        SessionOutcome {
            reason,
            total: self.total,
            error,
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    fn enable(&self) -> Result<()> {
        let mut engine = self.shared.lock_engine()?;
        if self.shared.config.escrow {
            operations::enable_bill_types_with_escrow(
                &mut engine,
                NominalMask::all(),
                NominalMask::all(),
            )
        } else {
            operations::enable_bill_types(&mut engine, NominalMask::all())
        }
    }

    fn poll_loop(&mut self) -> (TerminationReason, Option<Error>) {
        let mut deadline = Deadline::after(self.request.timeout);

        loop {
            if self.cancelled() {
                return (TerminationReason::Cancelled, None);
            }

            if let Step::Stop(reason, error) = self.cycle(&mut deadline) {
                return (reason, error);
            }

            if self.cancelled() {
                return (TerminationReason::Cancelled, None);
            }
            if deadline.is_expired() {
                log::info!("no note stacked for {:?}", deadline.window());
                return (TerminationReason::Timeout, None);
            }

            thread::sleep(self.shared.config.poll_interval);
        }
    }

    /// One POLL and whatever the reported status requires, under a single
    /// hold of the transaction lock.
    fn cycle(&mut self, deadline: &mut Deadline) -> Step {
        let shared = Arc::clone(&self.shared);
        let mut engine = match shared.lock_engine() {
            Ok(engine) => engine,
            Err(err) => return self.communication_error(err),
        };
        match self.handle_poll(&mut engine, deadline) {
            Ok(step) => step,
            Err(err) => self.communication_error(err),
        }
    }

    fn handle_poll(
        &mut self,
        engine: &mut TransactionEngine,
        deadline: &mut Deadline,
    ) -> Result<Step> {
        let status = operations::poll(engine)?;
        log::trace!("session poll: {}", status);
        self.shared.observe(&status);

        match status.state() {
            DeviceState::Idling
            | DeviceState::Accepting
            | DeviceState::Initialize
            | DeviceState::UnitDisabled
            | DeviceState::Holding
            | DeviceState::DeviceBusy => Ok(Step::Continue),
            DeviceState::Stacking | DeviceState::Returning => {
                engine.send_ack()?;
                Ok(Step::Continue)
            }
            DeviceState::BillReturning(code) => {
                engine.send_ack()?;
                log::debug!("bill type {:#04x} handed back", code);
                Ok(Step::Continue)
            }
            DeviceState::Escrow(code) => {
                engine.send_ack()?;
                self.resolve_escrow(engine, code)?;
                Ok(Step::Continue)
            }
            DeviceState::BillStacked(code) => {
                engine.send_ack()?;
                Ok(self.bill_stacked(code, deadline))
            }
            DeviceState::Reject(reason) => {
                engine.send_ack()?;
                self.shared.emit(Event::BillRejected {
                    reason: reason.description(),
                });
                Ok(Step::Continue)
            }
            state if state.is_error() => {
                log::warn!("device fault during session: {}", status);
                engine.send_nak()?;
                Ok(self.device_fault(status))
            }
            _ => {
                // Power up or a code we do not know: the device is no longer
                // in the session we started.
                log::warn!("unexpected status during session: {}", status);
                Ok(self.device_fault(status))
            }
        }
    }

    /// Decide on the note in escrow and STACK or RETURN it.
    fn resolve_escrow(&mut self, engine: &mut TransactionEngine, code: u8) -> Result<()> {
        let Some(value) = denomination(code) else {
            log::warn!("unknown bill type {:#04x} in escrow, returning it", code);
            operations::return_bill(engine)?;
            self.shared.emit(Event::BillRejected {
                reason: Error::UnknownDenomination(code).to_string(),
            });
            return Ok(());
        };

        let (decision, why) = if self.cancelled() {
            (EscrowDecision::Reject, "session cancelled")
        } else {
            (self.decider.decide(value, self.total), "declined")
        };

        match decision {
            EscrowDecision::Accept => {
                log::debug!("stacking {}", value);
                operations::stack(engine)
            }
            EscrowDecision::Reject => {
                log::debug!("returning {}: {}", value, why);
                operations::return_bill(engine)?;
                self.shared.emit(Event::BillRejected {
                    reason: format!("{} returned, {}", value, why),
                });
                Ok(())
            }
        }
    }

    fn bill_stacked(&mut self, code: u8, deadline: &mut Deadline) -> Step {
        let Some(value) = denomination(code) else {
            log::warn!("unknown bill type {:#04x} stacked, not counted", code);
            self.shared.emit(Event::BillRejected {
                reason: Error::UnknownDenomination(code).to_string(),
            });
            return Step::Continue;
        };

        self.total = self.total.saturating_add(value.value());
        self.shared.emit(Event::BillAccepted(value));
        self.shared.emit(Event::RunningTotal(self.total));
        deadline.restart();

        if self.total > self.request.target_sum {
            log::info!(
                "target {} exceeded with {}",
                self.request.target_sum,
                self.total
            );
            Step::Stop(TerminationReason::SumReached, None)
        } else {
            Step::Continue
        }
    }

    fn device_fault(&self, status: DeviceStatus) -> Step {
        self.shared.emit(Event::DeviceFault(Fault::Device(status)));
        Step::Stop(
            TerminationReason::DeviceFault,
            Some(Error::DeviceFault(status)),
        )
    }

    fn communication_error(&self, err: Error) -> Step {
        self.report_communication(&err);
        Step::Stop(TerminationReason::CommunicationError, Some(err))
    }

    fn report_communication(&self, err: &Error) {
        log::warn!("session aborted: {}", err);
        self.shared
            .emit(Event::DeviceFault(Fault::Communication(err.to_string())));
    }
}

fn disable(shared: &Shared) {
    let result = shared
        .lock_engine()
        .and_then(|mut engine| operations::disable(&mut engine));
    if let Err(err) = result {
        log::warn!("failed to disable validator after session: {}", err);
    }
}

/// Disables the validator and frees the session slot if the worker unwinds
/// before the session ended normally.
struct Teardown {
    shared: Arc<Shared>,
    armed: bool,
}

impl Teardown {
    fn new(shared: Arc<Shared>) -> Self {
        Self {
            shared,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        if self.armed {
            log::error!("session worker panicked, disabling validator");
            disable(&self.shared);
            self.shared.finish_session();
        }
    }
}
