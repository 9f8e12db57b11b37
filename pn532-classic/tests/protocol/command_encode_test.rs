#[path = "../common/mod.rs"]
mod common;

use pn532_classic::protocol::codec::encode_command_frame;
use pn532_classic::protocol::Command;
use pn532_classic::types::{BlockData, MifareKey, Uid};

fn uid() -> Uid {
    Uid::try_from(&common::fixtures::SAMPLE_UID[..]).unwrap()
}

#[test]
fn handshake_payloads() {
    assert_eq!(Command::GetFirmwareVersion.encode(), vec![0x02]);
    assert_eq!(
        Command::SetMaxRetries {
            passive_activation: 0xFF
        }
        .encode(),
        vec![0x32, 0x05, 0xFF, 0x01, 0xFF]
    );
    assert_eq!(
        Command::SamConfiguration {
            mode: 0x01,
            timeout: 0x14,
            use_irq: 0x01
        }
        .encode(),
        vec![0x14, 0x01, 0x14, 0x01]
    );
}

#[test]
fn list_target_frame_matches_fixture() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        brty: 0,
    };
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        common::fixtures::list_target_command_frame()
    );
}

#[test]
fn mifare_payloads() {
    let auth = Command::MifareAuthenticate {
        key: MifareKey::NDEF,
        block: 4,
        uid: uid(),
    };
    assert_eq!(
        hex::encode(auth.encode()),
        "40016004d3f7d3f7d3f7deadbeef"
    );

    let key_b = Command::MifareAuthenticate {
        key: MifareKey::b([0xFF; 6]),
        block: 7,
        uid: uid(),
    };
    assert_eq!(key_b.encode()[2], 0x61);

    assert_eq!(
        Command::MifareRead { block: 6 }.encode(),
        vec![0x40, 0x01, 0x30, 0x06]
    );

    let write = Command::MifareWrite {
        block: 5,
        data: BlockData::from_bytes([0x42; 16]),
    }
    .encode();
    assert_eq!(&write[..4], &[0x40, 0x01, 0xA0, 0x05]);
    assert_eq!(write.len(), 20);
}
