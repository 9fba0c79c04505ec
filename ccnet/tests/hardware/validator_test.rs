#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use ccnet::Result;

// This integration test requires a validator on the port named by
// CCNET_PORT. It is marked `#[ignore]` so CI does not attempt to run it.
// Run manually with:
//
// CCNET_PORT=/dev/ttyUSB0 cargo test -p ccnet --test hardware --features serial -- --ignored

#[test]
#[ignore]
fn power_up_and_identify() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(validator) = common::open_validator()? else {
        return Ok(());
    };
    let id = validator.identification()?;
    assert!(!id.part_number.is_empty());
    let status = validator.get_status()?;
    log::info!("enabled bill types: {}", status.enabled);
    Ok(())
}
