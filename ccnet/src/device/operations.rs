// ccnet-rs/ccnet/src/device/operations.rs
//! Single-command operations on a transaction engine.
//!
//! Each function is one request/response exchange (two for `power_up`).
//! Callers are responsible for holding the device lock around them.

use crate::device::status::DeviceStatus;
use crate::device::transaction::TransactionEngine;
use crate::protocol::commands::{encode_enable_bill_types, encode_set_security};
use crate::protocol::parser::expect_ack;
use crate::protocol::responses::{decode_bill_type_status, decode_identification};
use crate::protocol::Command;
use crate::types::{BillTypeStatus, Identification, NominalMask};
use crate::{Error, Result};

/// Send a command the device answers with a bare ACK.
fn acknowledged(engine: &mut TransactionEngine, cmd: Command, data: &[u8]) -> Result<()> {
    debug_assert!(cmd.expects_ack(), "{} is not answered with ACK", cmd.name());
    let reply = engine.send(cmd, data)?;
    expect_ack(&reply)
}

pub fn reset(engine: &mut TransactionEngine) -> Result<()> {
    acknowledged(engine, Command::Reset, &[])
}

/// POLL once and return the raw status. Neither ACK nor NAK is sent.
pub fn poll(engine: &mut TransactionEngine) -> Result<DeviceStatus> {
    let reply = engine.send(Command::Poll, &[])?;
    Ok(DeviceStatus::from_reply(&reply))
}

pub fn get_status(engine: &mut TransactionEngine) -> Result<BillTypeStatus> {
    let reply = engine.send(Command::GetStatus, &[])?;
    decode_bill_type_status(&reply)
}

pub fn identification(engine: &mut TransactionEngine) -> Result<Identification> {
    let reply = engine.send(Command::Identification, &[])?;
    decode_identification(&reply)
}

pub fn enable_bill_types(engine: &mut TransactionEngine, enabled: NominalMask) -> Result<()> {
    enable_bill_types_with_escrow(engine, enabled, NominalMask::none())
}

pub fn enable_bill_types_with_escrow(
    engine: &mut TransactionEngine,
    enabled: NominalMask,
    escrow: NominalMask,
) -> Result<()> {
    let payload = encode_enable_bill_types(enabled, escrow);
    acknowledged(engine, Command::EnableBillTypes, &payload)
}

/// Clear the bill type mask so no note is accepted.
pub fn disable(engine: &mut TransactionEngine) -> Result<()> {
    enable_bill_types(engine, NominalMask::none())
}

pub fn set_security(engine: &mut TransactionEngine, mask: NominalMask) -> Result<()> {
    let payload = encode_set_security(mask);
    acknowledged(engine, Command::SetSecurity, &payload)
}

/// Send the escrowed note to the cassette.
pub fn stack(engine: &mut TransactionEngine) -> Result<()> {
    acknowledged(engine, Command::Stack, &[])
}

/// Hand the escrowed note back to the customer.
pub fn return_bill(engine: &mut TransactionEngine) -> Result<()> {
    acknowledged(engine, Command::Return, &[])
}

/// Extend the escrow hold time.
pub fn hold(engine: &mut TransactionEngine) -> Result<()> {
    acknowledged(engine, Command::Hold, &[])
}

/// Startup handshake: RESET, then two POLLs that are expected to report
/// INITIALIZE and UNIT DISABLED. Each normal status is ACKed; an error
/// status is NAKed and aborts the sequence.
///
/// Returns the status of the final poll.
pub fn power_up(engine: &mut TransactionEngine) -> Result<DeviceStatus> {
    reset(engine)?;

    let mut last = poll_and_settle(engine)?;
    log::debug!("power up: {}", last);
    last = poll_and_settle(engine)?;
    log::info!("validator ready: {}", last);
    Ok(last)
}

fn poll_and_settle(engine: &mut TransactionEngine) -> Result<DeviceStatus> {
    let status = poll(engine)?;
    if status.is_error() {
        log::warn!("power up aborted: {}", status);
        engine.send_nak()?;
        return Err(Error::DeviceFault(status));
    }
    engine.send_ack()?;
    Ok(status)
}
