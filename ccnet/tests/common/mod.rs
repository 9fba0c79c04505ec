// Shared helpers for the integration test crates. Each per-topic file pulls
// this in with `#[path = "../common/mod.rs"]`.
#![allow(dead_code)]

pub mod fixtures;

pub use ccnet::test_support::{
    corrupted_frame, mock_validator, push_accepted_note, push_ack, reply_frame, RecordingSink,
};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
