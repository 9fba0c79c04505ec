#[path = "../common/mod.rs"]
mod common;

use ccnet::transport::MockTransport;
use ccnet::{DeviceState, Error};

use common::fixtures::*;

#[test]
fn reset_then_two_acknowledged_polls() {
    common::init_logging();
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_frame(INITIALIZE.to_vec());
    mock.push_reply(0x19, &[]);
    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();

    let status = v.power_up().unwrap();
    assert_eq!(status.state(), DeviceState::UnitDisabled);
    assert_eq!(
        mock.sent(),
        vec![
            RESET.to_vec(),
            POLL.to_vec(),
            ACK.to_vec(),
            POLL.to_vec(),
            ACK.to_vec(),
        ]
    );
}

#[test]
fn error_status_is_naked_and_fails() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_frame(INITIALIZE.to_vec());
    mock.push_frame(FAILURE_STACK_MOTOR.to_vec());
    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();

    match v.power_up() {
        Err(Error::DeviceFault(status)) => {
            assert_eq!(status.z1, 0x47);
            assert_eq!(status.z2, 0x50);
        }
        other => panic!("expected DeviceFault, got: {:?}", other),
    }
    assert_eq!(mock.sent().last().unwrap(), &NAK.to_vec());
}

#[test]
fn reset_not_acknowledged() {
    let mock = MockTransport::new();
    mock.push_reply(0x30, &[]);
    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    assert!(matches!(
        v.power_up(),
        Err(Error::UnexpectedResponse { .. })
    ));
    assert_eq!(mock.sent_codes(), vec![0x30]);
}
