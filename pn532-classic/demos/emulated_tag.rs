// Write and read back NDEF records on an emulated PN532 with a blank
// Mifare Classic 1K tag in the field.
//
// Run with `RUST_LOG=debug cargo run --example emulated_tag` to see every
// exchange with the chip.

use anyhow::Context;
use pn532_classic::prelude::*;
use pn532_classic::test_support::EmulatedPn532;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let chip = EmulatedPn532::with_blank_card(&[0x04, 0xA2, 0x19, 0x7C]);
    let (mut dev, chip) = chip
        .into_shared_device(DriverConfig {
            settle_delay_ms: 0,
            block_settle_ms: 0,
            ..DriverConfig::default()
        })
        .context("building device")?;

    let uid = dev.read_uid().context("polling for a tag")?;
    println!("tag in field: {}", hex_uid(&uid));

    dev.write_text("hello from pn532-classic")
        .context("writing text record")?;
    println!("text record: {:?}", dev.read_tag_payload()?);

    dev.write_uri("https://www.rust-lang.org")
        .context("writing URI record")?;
    println!("uri record body: {:?}", dev.read_tag_payload()?);

    let trailer = chip.borrow().block(7);
    println!("sector 1 trailer: {:02X?}", trailer);

    Ok(())
}

fn hex_uid(uid: &Uid) -> String {
    uid.as_bytes().iter().map(|b| format!("{:02X}", b)).collect()
}
