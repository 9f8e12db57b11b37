#[path = "../common/mod.rs"]
mod common;

use pn532_classic::protocol::codec::decode_response;
use pn532_classic::protocol::{Command, Response};
use pn532_classic::Error;

#[test]
fn firmware_scenario() {
    let read = common::fixtures::firmware_read();
    match decode_response(&Command::GetFirmwareVersion, &read[1..]).unwrap() {
        Response::FirmwareVersion(fw) => {
            assert_eq!(fw.chip_family(), 0x32);
            assert_eq!(fw.version, 1);
            assert_eq!(fw.revision, 6);
            assert_eq!(fw.to_string(), "PN532 v1.6");
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn target_scenario() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        brty: 0,
    };
    let read = common::fixtures::target_read();
    match decode_response(&cmd, &read[1..]).unwrap() {
        Response::Target { atqa, sak, uid } => {
            assert_eq!(atqa, 0x0004);
            assert_eq!(sak, 0x08);
            assert_eq!(uid.as_bytes(), &common::fixtures::SAMPLE_UID);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    let mut empty = common::fixtures::no_target_read();
    empty.resize(21, 0);
    assert!(matches!(
        decode_response(&cmd, &empty[1..]),
        Err(Error::NoTarget)
    ));
}

#[test]
fn sam_reply_checked() {
    let cmd = Command::SamConfiguration {
        mode: 1,
        timeout: 0x14,
        use_irq: 1,
    };
    let read = common::fixtures::sam_read();
    assert!(matches!(
        decode_response(&cmd, &read[1..]),
        Ok(Response::SamConfigured)
    ));
    assert!(decode_response(&cmd, &[0u8; 8]).is_err());
}

#[test]
fn truncated_replies_are_errors() {
    assert!(matches!(
        decode_response(&Command::GetFirmwareVersion, &[0x00, 0x00, 0xFF]),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        decode_response(&Command::MifareRead { block: 4 }, &[0u8; 4]),
        Err(Error::InvalidLength { .. })
    ));
}
