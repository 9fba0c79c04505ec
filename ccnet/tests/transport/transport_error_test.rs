#[path = "../common/mod.rs"]
mod common;

use ccnet::transport::{MockTransport, Transport};
use ccnet::Error;

use common::fixtures::*;

#[test]
fn write_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.push_frame(IDLING.to_vec());
    m.set_write_failures(1);

    // First write fails and consumes nothing
    assert!(matches!(m.write(&POLL), Err(Error::Io(_))));
    assert_eq!(m.pending_replies(), 1);

    // Second write gets the queued reply
    m.write(&POLL).unwrap();
    assert_eq!(m.read_available().unwrap(), IDLING);
}

#[cfg(feature = "serial")]
#[test]
fn opening_a_missing_port_fails() {
    use ccnet::transport::{SerialConfig, SerialTransport};

    let config = SerialConfig::new("/dev/ccnet-does-not-exist");
    match SerialTransport::open(&config) {
        Err(Error::TransportOpenFailure(_)) | Err(Error::Io(_)) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("port unexpectedly opened"),
    }
}
