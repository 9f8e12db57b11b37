// pn532-classic/src/protocol/responses/target.rs

use crate::protocol::parser;
use crate::types::Uid;
use crate::{Error, Result};

/// ISO14443A InListPassiveTarget reply layout (status byte stripped):
///
/// | offset | field                         |
/// |--------|-------------------------------|
/// | 0..=6  | frame header, D5 4B           |
/// | 7      | tags found                    |
/// | 8      | target number                 |
/// | 9..=10 | SENS_RES (ATQA)               |
/// | 11     | SEL_RES (SAK)                 |
/// | 12     | NFCID length                  |
/// | 13..   | NFCID (UID)                   |
pub const TAGS_FOUND_OFFSET: usize = 7;
pub const ATQA_OFFSET: usize = 9;
pub const SAK_OFFSET: usize = 11;
pub const UID_LEN_OFFSET: usize = 12;
pub const UID_OFFSET: usize = 13;

/// Decode an InListPassiveTarget reply into (ATQA, SAK, UID). Anything
/// other than exactly one tag found is `NoTarget`.
pub fn decode_target(data: &[u8]) -> Result<(u16, u8, Uid)> {
    if parser::byte_at(data, TAGS_FOUND_OFFSET)? != 1 {
        return Err(Error::NoTarget);
    }

    let atqa = parser::slice_at(data, ATQA_OFFSET, 2)?;
    let atqa = u16::from_be_bytes([atqa[0], atqa[1]]);
    let sak = parser::byte_at(data, SAK_OFFSET)?;
    let uid_len = parser::byte_at(data, UID_LEN_OFFSET)? as usize;
    let uid = Uid::try_from(parser::slice_at(data, UID_OFFSET, uid_len)?)?;

    Ok((atqa, sak, uid))
}
