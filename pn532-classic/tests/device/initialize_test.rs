#[path = "../common/mod.rs"]
mod common;

use pn532_classic::device::{DeviceBuilder, Pn532};
use pn532_classic::test_support::{mock_with_responses, SharedTransport};
use pn532_classic::transport::mock::MockTransport;
use pn532_classic::{Error, ErrorKind};

#[test]
fn initialize_sends_handshake_in_order() {
    common::init_logging();
    let mut mock = MockTransport::new();
    common::fixtures::seed_init(&mut mock);
    let shared = SharedTransport::new(mock);

    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .max_retries(0x10)
        .build()
        .unwrap();
    let token = dev.initialize().unwrap();
    assert_eq!(token.firmware().as_u32(), 0x3201_0607);

    let inner = shared.borrow();
    assert_eq!(inner.sent.len(), 3);
    assert_eq!(inner.sent[0], common::fixtures::firmware_command_frame());
    assert_eq!(&inner.sent[1][6..11], &[0x32, 0x05, 0xFF, 0x01, 0x10]);
    assert_eq!(&inner.sent[2][6..10], &[0x14, 0x01, 0x14, 0x01]);
    // 50 ms after every write and every read
    assert!(inner.delays.iter().all(|&d| d == 50));
}

#[test]
fn initialize_is_idempotent() {
    let mut mock = MockTransport::new();
    common::fixtures::seed_init(&mut mock);
    let shared = SharedTransport::new(mock);
    let mut dev = Pn532::new_with_transport(Box::new(shared.clone()));

    let first = dev.initialize().unwrap();
    let second = dev.initialize().unwrap();
    assert_eq!(first, second);
    assert_eq!(shared.borrow().sent.len(), 3);
}

#[test]
fn silent_bus_is_bus_failure() {
    let mut dev = Pn532::new_with_transport(Box::new(mock_with_responses(vec![vec![0x00; 7]])));
    let err = dev.initialize().unwrap_err();
    assert!(matches!(err, Error::NoAck));
    assert_eq!(err.kind(), ErrorKind::BusFailure);
    assert!(!dev.is_initialized());
}

#[test]
fn wrong_firmware_prefix_is_protocol_mismatch() {
    let mut garbage = common::fixtures::firmware_read();
    garbage[5] = 0xFB; // LCS
    let responses = vec![common::fixtures::ack_read(), garbage];
    let mut dev = Pn532::new_with_transport(Box::new(mock_with_responses(responses)));

    let err = dev.initialize().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProtocolMismatch);
}
