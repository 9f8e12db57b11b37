#[path = "../common/mod.rs"]
mod common;

use pn532_classic::card::operations::read::read_blocks;
use pn532_classic::test_support::{initialized_device, mock_with_responses};
use pn532_classic::types::{BlockData, MifareKey};
use pn532_classic::{Error, ErrorKind};

#[test]
fn write_then_read_blocks_on_emulated_tag() {
    let (mut dev, chip) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    let card = dev.read_passive_target().unwrap();
    card.authenticate(&mut dev, 12, &MifareKey::DEFAULT).unwrap();

    for (i, block) in (12..15).enumerate() {
        let data = BlockData::from_bytes([i as u8 + 1; 16]);
        dev.write_block(block, &data).unwrap();
    }
    let blocks = read_blocks(&mut dev, &[12, 13, 14]).unwrap();
    assert_eq!(blocks[2].as_bytes(), &[3; 16]);
    assert_eq!(chip.borrow().block(13), Some([2; 16]));
}

#[test]
fn failed_auth_reports_block() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    let card = dev.read_passive_target().unwrap();

    let err = card
        .authenticate(&mut dev, 20, &MifareKey::MAD)
        .unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { block: 20 }));
    assert_eq!(err.kind(), ErrorKind::ProtocolMismatch);
}

#[test]
fn read_status_error_reported() {
    let mut reply = hex::decode("010000FF03FDD5410AE000").unwrap();
    reply.resize(27, 0);
    let responses = vec![common::fixtures::ack_read(), reply];
    let mut dev = initialized_device(Box::new(mock_with_responses(responses)));

    assert!(matches!(
        dev.read_block(4),
        Err(Error::MifareStatus {
            block: 4,
            status: 0x0A
        })
    ));
}
