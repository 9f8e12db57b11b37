#[path = "../common/mod.rs"]
mod common;

use pn532_classic::protocol::checksum::wrapping_sum;
use pn532_classic::protocol::{dcs, lcs, Frame};
use proptest::prelude::*;

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    // D4 02
    assert_eq!(dcs(&[0xD4, 0x02]), 0x2a);
    assert_eq!(dcs(&[]), 0x00);
}

proptest! {
    // LEN + LCS and TFI + payload + DCS both sum to zero mod 256.
    #[test]
    fn frame_sections_sum_to_zero(payload in prop::collection::vec(any::<u8>(), 0..=254)) {
        let frame = Frame::encode(&payload).unwrap();
        let len = frame[Frame::LEN_OFFSET] as usize;
        prop_assert_eq!(len, payload.len() + 1);
        prop_assert_eq!(wrapping_sum(&frame[3..5]), 0);
        prop_assert_eq!(wrapping_sum(&frame[Frame::TFI_OFFSET..Frame::TFI_OFFSET + len + 1]), 0);
    }
}
