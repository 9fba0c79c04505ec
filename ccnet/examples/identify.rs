//! Power up a validator and print what it reports about itself.
//!
//! Usage:
//!   cargo run -p ccnet --example identify --features serial -- /dev/ttyUSB0

use anyhow::Context;
use ccnet::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: identify <serial port>")?;

    let validator = DeviceBuilder::new()
        .with_serial(&SerialConfig::new(path.as_str()))?
        .build()?;

    let status = validator.power_up().context("power up failed")?;
    println!("Status: {}", status);

    let id = validator.identification()?;
    println!("Part number:   {}", id.part_number);
    println!("Serial number: {}", id.serial_number);
    println!("Asset number:  {}", id.asset_number);

    let bill_types = validator.get_status()?;
    println!("Enabled:       {}", bill_types.enabled);
    println!("High security: {}", bill_types.security);
    Ok(())
}
