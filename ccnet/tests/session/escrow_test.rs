#[path = "../common/mod.rs"]
mod common;

use std::thread;
use std::time::Duration;

use serial_test::serial;

use ccnet::transport::MockTransport;
use ccnet::{Denomination, EscrowDecision, Event, SessionRequest, TerminationReason};

use common::fixtures::*;

#[test]
#[serial]
fn unknown_bill_type_is_returned() {
    common::init_logging();
    let mock = MockTransport::new();
    common::push_ack(&mock); // enable
    mock.push_reply(0x80, &[0x08]);
    common::push_ack(&mock); // RETURN
    mock.push_reply(0x82, &[0x08]);
    mock.push_frame(STACKED_100.to_vec());
    common::push_ack(&mock); // disable

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let outcome = v
        .start_session(SessionRequest::new(50, Duration::from_secs(2)))
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.reason, TerminationReason::SumReached);
    assert_eq!(outcome.total, 100);
    assert_eq!(
        mock.sent_codes(),
        vec![0x34, 0x33, 0x00, 0x36, 0x33, 0x00, 0x33, 0x00, 0x34]
    );
    match &sink.events()[0] {
        Event::BillRejected { reason } => assert!(reason.contains("0x08"), "{}", reason),
        other => panic!("expected rejection first, got {}", other),
    }
}

#[test]
#[serial]
fn decider_can_decline_a_note() {
    let mock = MockTransport::new();
    common::push_ack(&mock);
    mock.push_reply(0x80, &[0x07]); // 5000
    common::push_ack(&mock); // RETURN
    mock.push_frame(ESCROW_100.to_vec());
    common::push_ack(&mock); // STACK
    mock.push_frame(STACKED_100.to_vec());
    common::push_ack(&mock);

    let sink = common::RecordingSink::new();
    let v = common::mock_validator(&mock, sink.clone()).unwrap();
    let mut asked = Vec::new();
    let decider = move |d: Denomination, total: u32| {
        asked.push((d, total));
        if d > Denomination::D1000 {
            EscrowDecision::Reject
        } else {
            EscrowDecision::Accept
        }
    };
    let outcome = v
        .start_session_with(SessionRequest::new(50, Duration::from_secs(2)), decider)
        .unwrap()
        .unwrap()
        .wait()
        .unwrap();

    assert_eq!(outcome.total, 100);
    let codes = mock.sent_codes();
    assert_eq!(codes[3], 0x36);
    assert_eq!(codes[6], 0x35);
    assert!(matches!(sink.events()[0], Event::BillRejected { .. }));
}

#[test]
#[serial]
fn note_escrowed_after_cancellation_is_returned() {
    common::init_logging();
    let mock = MockTransport::new();
    common::push_ack(&mock); // enable
    // The ESCROW reply is in flight when the cancel arrives.
    mock.push_chunks(vec![ESCROW_100.to_vec()], Duration::from_millis(80));
    common::push_ack(&mock); // RETURN
    common::push_ack(&mock); // disable

    let v = common::mock_validator(&mock, common::RecordingSink::new()).unwrap();
    let handle = v
        .start_session(SessionRequest::new(100, Duration::from_secs(2)))
        .unwrap()
        .unwrap();
    thread::sleep(Duration::from_millis(30));
    handle.cancel();
    let outcome = handle.wait().unwrap();

    assert_eq!(outcome.reason, TerminationReason::Cancelled);
    assert_eq!(outcome.total, 0);
    assert_eq!(mock.sent_codes(), vec![0x34, 0x33, 0x00, 0x36, 0x34]);
}
