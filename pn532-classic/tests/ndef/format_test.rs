#[path = "../common/mod.rs"]
mod common;

use pn532_classic::constants::{
    KEY_MAD, MAD_BLOCK_1, MAD_BLOCK_2, MAD_TRAILER, PN532_CMD_IN_LIST_PASSIVE_TARGET,
};
use pn532_classic::types::MifareKey;

#[test]
fn factory_key_at_block_zero_formats_tag() {
    let (mut dev, chip) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_text("hello").unwrap();

    let chip = chip.borrow();
    assert_eq!(chip.block(1), Some(MAD_BLOCK_1));
    assert_eq!(chip.block(2), Some(MAD_BLOCK_2));
    assert_eq!(chip.block(3), Some(MAD_TRAILER));
    assert_eq!(&chip.block(3).unwrap()[..6], &KEY_MAD);
}

#[test]
fn formatted_tag_is_not_formatted_again() {
    let (mut dev, chip) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_text("one").unwrap();

    // scribble over the MAD; a second write must leave it alone
    chip.borrow_mut().set_block(1, [0xAA; 16]);
    dev.write_text("two").unwrap();
    assert_eq!(chip.borrow().block(1), Some([0xAA; 16]));
    assert_eq!(dev.read_tag_payload().unwrap(), "two");
}

#[test]
fn mad_key_opens_sector_zero_after_format() {
    let (mut dev, chip) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_text("hello").unwrap();
    let polls = chip.borrow().count(PN532_CMD_IN_LIST_PASSIVE_TARGET);

    let card = dev.read_passive_target().unwrap();
    dev.authenticate(&card, 1, &MifareKey::MAD).unwrap();
    assert_eq!(dev.read_block(1).unwrap().as_bytes(), &MAD_BLOCK_1);
    assert_eq!(
        chip.borrow().count(PN532_CMD_IN_LIST_PASSIVE_TARGET),
        polls + 1
    );
}
