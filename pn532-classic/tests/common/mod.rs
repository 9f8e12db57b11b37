// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]


use pn532_classic::device::{DriverConfig, Pn532};
use pn532_classic::test_support::{fast_config, EmulatedPn532, SharedTransport};

/// Install env_logger once per test binary; RUST_LOG controls output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Driver without settle delays over an emulated chip holding a blank card.
pub fn blank_tag_device(uid: &[u8]) -> (Pn532, SharedTransport<EmulatedPn532>) {
    init_logging();
    EmulatedPn532::with_blank_card(uid)
        .into_shared_device(fast_config())
        .unwrap()
}

/// Same as `blank_tag_device`, storing records in `sector`.
pub fn blank_tag_device_for_sector(
    uid: &[u8],
    sector: u8,
) -> (Pn532, SharedTransport<EmulatedPn532>) {
    init_logging();
    let config = DriverConfig {
        ndef_sector: sector,
        ..fast_config()
    };
    EmulatedPn532::with_blank_card(uid)
        .into_shared_device(config)
        .unwrap()
}
