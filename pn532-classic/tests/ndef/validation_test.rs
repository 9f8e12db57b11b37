#[path = "../common/mod.rs"]
mod common;

use pn532_classic::ndef::{encode_sector_buffer, read_record, write_record, RecordKind};
use pn532_classic::test_support::{initialized_device, SharedTransport};
use pn532_classic::transport::mock::MockTransport;
use pn532_classic::{Error, ErrorKind};

#[test]
fn sectors_outside_data_range_rejected_without_io() {
    let shared = SharedTransport::new(MockTransport::new());
    let mut dev = initialized_device(Box::new(shared.clone()));
    let tf = RecordKind::text().type_field();

    for sector in [0u8, 16, 255] {
        let err = write_record(&mut dev, sector, &tf, b"hi").unwrap_err();
        assert!(matches!(err, Error::SectorOutOfRange(s) if s == sector));
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(read_record(&mut dev, sector).is_err());
    }
    assert!(shared.borrow().sent.is_empty());
}

#[test]
fn empty_and_oversized_payloads_rejected() {
    let (mut dev, chip) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);

    assert!(matches!(
        dev.write_text(""),
        Err(Error::PayloadLength { len: 0, .. })
    ));
    assert!(matches!(
        dev.write_uri(&"a".repeat(39)),
        Err(Error::PayloadLength { len: 39, max: 38 })
    ));
    assert!(chip.borrow().commands.is_empty());
}

#[test]
fn max_is_forty_minus_type_field() {
    for tf_len in 1..=8usize {
        let tf = vec![0x54; tf_len];
        let max = 40 - tf_len;
        assert!(encode_sector_buffer(&tf, &vec![b'a'; max]).is_ok());
        assert!(encode_sector_buffer(&tf, &vec![b'a'; max + 1]).is_err());
    }
}
