#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use serial_test::serial;

use ccnet::transport::MockTransport;
use ccnet::{Denomination, EscrowDecision, Error, Event, Fault, SessionRequest, TerminationReason};

use common::fixtures::*;

#[test]
#[serial]
fn silent_device_ends_with_communication_error() {
    common::init_logging();
    let mock = MockTransport::new();
    common::push_ack(&mock); // enable, then nothing answers

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let outcome = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.reason, TerminationReason::CommunicationError);
    assert!(matches!(outcome.error, Some(Error::Timeout)));
    // enable, poll, disable; no ACK or NAK
    assert_eq!(mock.sent_codes(), vec![0x34, 0x33, 0x34]);
    let events = sink.events();
    assert!(matches!(
        events[0],
        Event::DeviceFault(Fault::Communication(_))
    ));
    assert_eq!(
        events.last(),
        Some(&Event::SessionEnded(TerminationReason::CommunicationError))
    );
}

#[test]
#[serial]
fn corrupted_poll_reply_is_naked_without_bill_event() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_frame(common::corrupted_frame(0x81, &[0x06]));
    common::push_ack(&mock);

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let outcome = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.reason, TerminationReason::CommunicationError);
    assert!(matches!(
        outcome.error,
        Some(Error::ChecksumMismatch { .. })
    ));
    assert_eq!(mock.sent_codes(), vec![0x34, 0x33, 0xff, 0x34]);
    assert!(!sink
        .events()
        .iter()
        .any(|e| matches!(e, Event::BillAccepted(_) | Event::RunningTotal(_))));
}

#[test]
#[serial]
fn cassette_removed_mid_session_is_a_device_fault() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_frame(IDLING.to_vec());
    mock.push_frame(CASSETTE_OUT.to_vec());
    common::push_ack(&mock);

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let outcome = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.reason, TerminationReason::DeviceFault);
    match outcome.error {
        Some(Error::DeviceFault(status)) => assert_eq!(status.z1, 0x42),
        other => panic!("expected DeviceFault, got: {:?}", other),
    }
    assert_eq!(mock.sent_codes(), vec![0x34, 0x33, 0x33, 0xff, 0x34]);
    let events = sink.events();
    assert_eq!(events[0], Event::CassetteRemoved);
    assert!(matches!(events[1], Event::DeviceFault(Fault::Device(_))));
    assert_eq!(
        events[2],
        Event::SessionEnded(TerminationReason::DeviceFault)
    );
}

#[test]
#[serial]
fn power_up_during_session_is_a_device_fault() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_reply(0x10, &[]);
    common::push_ack(&mock);

    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    let outcome = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();
    assert_eq!(outcome.reason, TerminationReason::DeviceFault);
}

#[test]
#[serial]
fn idle_session_times_out() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    for _ in 0..500 {
        mock.push_frame(IDLING.to_vec());
    }

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let started = Instant::now();
    let outcome = v
        .start_session(SessionRequest::new(100, Duration::from_millis(100)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.reason, TerminationReason::Timeout);
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert!(!mock.sent_codes().contains(&0x00));
    assert_eq!(mock.sent_codes().last(), Some(&0x34));
    assert_eq!(
        sink.events(),
        vec![Event::SessionEnded(TerminationReason::Timeout)]
    );
}

#[test]
#[serial]
fn enable_failure_ends_session_immediately() {
    let mock = MockTransport::new();
    mock.push_reply(0x30, &[]); // ILLEGAL COMMAND instead of ACK
    common::push_ack(&mock);

    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    let handle = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .unwrap();
    while !handle.is_finished() {
        std::thread::sleep(Duration::from_millis(5));
    }
    let outcome = handle.wait().unwrap();
    assert_eq!(outcome.reason, TerminationReason::CommunicationError);
    assert!(matches!(
        outcome.error,
        Some(Error::UnexpectedResponse { .. })
    ));
    assert_eq!(mock.sent_codes(), vec![0x34, 0x34]);
}

#[test]
#[serial]
fn unbounded_timeout_runs_until_cancelled() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    for _ in 0..500 {
        mock.push_frame(IDLING.to_vec());
    }

    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    let handle = v
        .start_session(SessionRequest::new(100, Duration::MAX))
        .unwrap()
        .unwrap();
    std::thread::sleep(Duration::from_millis(30));
    assert!(v.stop_session());
    let outcome = handle.wait().unwrap();

    assert_eq!(outcome.reason, TerminationReason::Cancelled);
    assert_eq!(mock.sent_codes().last(), Some(&0x34));
    assert!(!v.is_session_active());
}

#[test]
#[serial]
fn panicking_decider_still_disables_and_frees_the_slot() {
    let mock = MockTransport::new();
    common::push_ack(&mock); // enable
    mock.push_frame(ESCROW_100.to_vec());
    common::push_ack(&mock); // disable from the unwinding worker

    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    let decider = |_: Denomination, _: u32| -> EscrowDecision { panic!("decider failed") };
    let res = v
        .start_session_with(SessionRequest::new(100, Duration::from_secs(5)), decider)
        .unwrap()
        .unwrap()
        .wait();

    assert!(matches!(res, Err(Error::SessionPanicked)));
    assert_eq!(mock.sent_codes(), vec![0x34, 0x33, 0x00, 0x34]);
    assert_eq!(mock.sent().last().unwrap(), &DISABLE.to_vec());
    assert!(!v.is_session_active());

    common::push_ack(&mock);
    for _ in 0..500 {
        mock.push_frame(IDLING.to_vec());
    }
    let next = v
        .start_session(SessionRequest::new(100, Duration::from_secs(5)))
        .unwrap()
        .expect("slot was freed");
    next.cancel();
    assert_eq!(next.wait().unwrap().reason, TerminationReason::Cancelled);
}
