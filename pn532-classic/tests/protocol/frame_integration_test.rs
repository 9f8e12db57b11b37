#[path = "../common/mod.rs"]
mod common;

use pn532_classic::constants::PN532_ACK;
use pn532_classic::protocol::Frame;
use proptest::prelude::*;

#[test]
fn firmware_frame_matches_fixture() {
    let frame = Frame::encode(&[0x02]).unwrap();
    assert_eq!(frame, common::fixtures::firmware_command_frame());
}

#[test]
fn reply_fixture_decodes() {
    let read = common::fixtures::firmware_read();
    let (tfi, payload) = Frame::decode(&read[1..]).expect("frame decode");
    assert_eq!(tfi, 0xD5);
    assert_eq!(payload, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn ack_constant_and_detection() {
    assert_eq!(PN532_ACK, [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
    assert!(Frame::is_ack(&common::fixtures::ack_read()[1..]));
    assert!(!Frame::is_ack(&PN532_ACK[..5]));
}

#[test]
fn oversized_payload_rejected() {
    assert!(Frame::encode(&[0u8; 255]).is_err());
}

proptest! {
    // Any single-byte change to the ACK makes it not an ACK.
    #[test]
    fn ack_mutation_detected(idx in 0usize..6, delta in 1u8..=255) {
        let mut ack = PN532_ACK;
        ack[idx] = ack[idx].wrapping_add(delta);
        prop_assert!(!Frame::is_ack(&ack));
    }

    #[test]
    fn encode_decode_payload(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let frame = Frame::encode(&payload).unwrap();
        prop_assert_eq!(frame.len(), payload.len() + Frame::OVERHEAD);
        let (tfi, decoded) = Frame::decode(&frame).unwrap();
        prop_assert_eq!(tfi, 0xD4);
        prop_assert_eq!(decoded, payload);
    }
}
