#[path = "../common/mod.rs"]
mod common;

use ccnet::device::{DeviceState, DeviceStatus, FailureKind, RejectReason};
use ccnet::protocol::responses::{decode_bill_type_status, decode_identification};
use ccnet::protocol::{Frame, Reply};
use ccnet::NominalMask;

use common::fixtures::*;

#[test]
fn identification_fields() {
    let body = identification_body();
    let (code, data) = split_body(&body);
    let id = decode_identification(&Reply::new(code, data.to_vec())).unwrap();
    assert_eq!(id.part_number, "SM-RU1353");
    assert_eq!(id.serial_number, "41A123456");
    assert_eq!(id.asset_number, "00-00-00-12-34-56-78");
}

#[test]
fn bill_type_status_masks() {
    let reply = Reply::new(0x00, vec![0x00, 0x30, 0x00, 0x00, 0x10]);
    let status = decode_bill_type_status(&reply).unwrap();
    assert_eq!(status.enabled, NominalMask::from_byte(0x30));
    assert_eq!(status.security, NominalMask::from_byte(0x10));
}

#[test]
fn poll_statuses_from_wire() {
    let status = |wire: &[u8]| DeviceStatus::from_reply(&Frame::decode(wire).unwrap());

    assert_eq!(status(&IDLING).state(), DeviceState::Idling);
    assert_eq!(status(&ESCROW_100).state(), DeviceState::Escrow(0x04));
    assert_eq!(
        status(&REJECT_INSERTION).state(),
        DeviceState::Reject(RejectReason::Insertion)
    );

    let failure = status(&FAILURE_STACK_MOTOR);
    assert_eq!(failure.state(), DeviceState::Failure(FailureKind::StackMotor));
    assert!(failure.is_error());
    assert!(status(&CASSETTE_OUT).is_error());
}
