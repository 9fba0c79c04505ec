//! Collect banknotes until the stacked total exceeds a target sum.
//!
//! Usage:
//!   cargo run -p ccnet --example collect_cash --features serial -- /dev/ttyUSB0 1500 60
//!
//! Arguments: serial port, target sum, idle timeout in seconds. Events are
//! printed as they arrive; Ctrl-C leaves the validator enabled, so prefer
//! letting the timeout expire.

use std::time::Duration;

use anyhow::{bail, Context};
use ccnet::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: collect_cash <serial port> [target sum] [timeout secs]");
    };
    let target: u32 = args.next().as_deref().unwrap_or("1000").parse()?;
    let timeout: u64 = args.next().as_deref().unwrap_or("60").parse()?;

    let (sink, events) = ChannelSink::new();
    let validator = DeviceBuilder::new()
        .with_serial(&SerialConfig::new(path.as_str()))?
        .with_event_sink(sink)
        .build()?;

    validator.power_up().context("power up failed")?;

    let request = SessionRequest::new(target, Duration::from_secs(timeout));
    let Some(session) = validator.start_session(request)? else {
        bail!("a session is already running");
    };

    println!("Insert notes, target {}", target);
    while !session.is_finished() {
        while let Some(event) = events.pop_event(ms(100)) {
            println!("{}", event);
        }
    }
    for event in events.drain() {
        println!("{}", event);
    }

    let outcome = session.wait()?;
    println!("Collected {} ({})", outcome.total, outcome.reason);
    if let Some(err) = outcome.error {
        println!("Cause: {}", err);
    }
    Ok(())
}
