#[path = "../common/mod.rs"]
mod common;

use pn532_classic::device::DetectorState;
use pn532_classic::test_support::{initialized_device, EmulatedPn532, SharedTransport};
use pn532_classic::transport::mock::MockTransport;
use pn532_classic::{Error, ErrorKind};

#[test]
fn target_scenario_over_the_bus() {
    let mut mock = MockTransport::new();
    mock.push_response(common::fixtures::ack_read());
    mock.push_response(common::fixtures::target_read());
    let shared = SharedTransport::new(mock);
    let mut dev = initialized_device(Box::new(shared.clone()));

    let uid = dev.read_uid().unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::SAMPLE_UID);
    assert_eq!(uid.to_u32(), Some(0xDEAD_BEEF));
    assert_eq!(
        shared.borrow().sent,
        vec![common::fixtures::list_target_command_frame()]
    );
}

#[test]
fn listening_survives_empty_polls() {
    let mut mock = MockTransport::new();
    mock.push_response(common::fixtures::ack_read());
    mock.push_response(common::fixtures::no_target_read());
    mock.push_response(common::fixtures::no_target_read());
    mock.push_response(common::fixtures::target_read());
    let shared = SharedTransport::new(mock);
    let mut dev = initialized_device(Box::new(shared.clone()));

    for _ in 0..2 {
        let err = dev.read_passive_target().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(dev.detector().state(), DetectorState::Listening);
    }
    let card = dev.read_passive_target().unwrap();
    assert_eq!(card.sak(), 0x08);
    assert_eq!(dev.detector().state(), DetectorState::Idle);
    // one command for three polls
    assert_eq!(shared.borrow().sent.len(), 1);
}

#[test]
fn tag_swap_makes_old_card_stale() {
    let (mut dev, chip) = common::blank_tag_device(&[1, 2, 3, 4]);
    let old = dev.read_passive_target().unwrap();

    chip.borrow_mut().remove_card();
    chip.borrow_mut()
        .place_card(pn532_classic::test_support::EmulatedCard::blank(&[5, 6, 7, 8]));
    let new = dev.read_passive_target().unwrap();
    assert_ne!(old.uid(), new.uid());

    assert!(matches!(
        dev.authenticate(&old, 4, &pn532_classic::MifareKey::DEFAULT),
        Err(Error::StaleTarget)
    ));
    dev.authenticate(&new, 4, &pn532_classic::MifareKey::DEFAULT)
        .unwrap();
}

#[test]
fn card_arrives_while_listening() {
    common::init_logging();
    let (mut dev, chip) = EmulatedPn532::new()
        .into_shared_device(pn532_classic::test_support::fast_config())
        .unwrap();
    assert!(matches!(dev.read_uid(), Err(Error::NoTarget)));

    chip.borrow_mut()
        .place_card(pn532_classic::test_support::EmulatedCard::blank(
            &common::fixtures::SAMPLE_UID,
        ));
    assert_eq!(dev.read_uid().unwrap().to_u32(), Some(0xDEAD_BEEF));
}
