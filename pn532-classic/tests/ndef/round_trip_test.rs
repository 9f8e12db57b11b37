#[path = "../common/mod.rs"]
mod common;

use pn532_classic::ndef::{RecordKind, UriPrefix};
use pn532_classic::types::Sector;

#[test]
fn text_round_trip_every_sector() {
    for sector in Sector::MIN..=Sector::MAX {
        let uid = [0x04, 0x0A, 0x0B, sector];
        let (mut dev, chip) = common::blank_tag_device_for_sector(&uid, sector);
        let text = format!("sector {}", sector);

        dev.write_text(&text).unwrap();
        assert_eq!(dev.read_tag_payload().unwrap(), text);

        let trailer = Sector::new(sector).unwrap().trailer_block();
        assert_eq!(
            chip.borrow().block(trailer),
            Some(pn532_classic::constants::NDEF_TRAILER)
        );
    }
}

#[test]
fn uri_round_trip_every_sector() {
    for sector in Sector::MIN..=Sector::MAX {
        let (mut dev, _) =
            common::blank_tag_device_for_sector(&common::fixtures::SAMPLE_UID, sector);
        dev.write_tag_payload(&RecordKind::Uri(UriPrefix::HTTP_WWW), b"example.org")
            .unwrap();
        assert_eq!(dev.read_tag_payload().unwrap(), "example.org");
    }
}

#[test]
fn rewrite_replaces_previous_record() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_text("a much longer first record").unwrap();
    dev.write_text("short").unwrap();
    assert_eq!(dev.read_tag_payload().unwrap(), "short");
}

#[test]
fn exact_maximum_payload_round_trips() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    let text = "x".repeat(RecordKind::text().max_content_len());
    dev.write_text(&text).unwrap();
    assert_eq!(dev.read_tag_payload().unwrap(), text);
}

#[test]
fn non_ascii_text_round_trips() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_text("café ünïcødé").unwrap();
    assert_eq!(dev.read_tag_payload().unwrap(), "café ünïcødé");
}

#[test]
fn multibyte_text_is_limited_by_bytes() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    // 18 two-byte characters fill the 36 byte text area exactly
    let text = "é".repeat(18);
    dev.write_text(&text).unwrap();
    assert_eq!(dev.read_tag_payload().unwrap(), text);

    assert!(matches!(
        dev.write_text(&"é".repeat(19)),
        Err(pn532_classic::Error::PayloadLength { len: 38, max: 36 })
    ));
}

#[test]
fn raw_non_utf8_content_is_rejected_on_read() {
    let (mut dev, _) = common::blank_tag_device(&common::fixtures::SAMPLE_UID);
    dev.write_tag_payload(&RecordKind::text(), &[b'c', b'a', b'f', 0xE9])
        .unwrap();
    assert!(matches!(
        dev.read_tag_payload(),
        Err(pn532_classic::Error::InvalidText(_))
    ));
}

#[test]
fn seven_byte_uid_tag() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let (mut dev, _) = common::blank_tag_device(&uid);
    dev.write_uri("https://example.com").unwrap();
    assert_eq!(dev.read_uid().unwrap().as_bytes(), &uid);
    assert_eq!(dev.read_tag_payload().unwrap(), "example.com");
}
