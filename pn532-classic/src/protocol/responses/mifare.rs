// pn532-classic/src/protocol/responses/mifare.rs

use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

/// InDataExchange reply: 00 00 FF LEN LCS D5 41 Status [data..] DCS 00
pub const STATUS_OFFSET: usize = 7;
pub const DATA_OFFSET: usize = 8;

/// Status byte of an InDataExchange reply
pub fn status(data: &[u8]) -> Result<u8> {
    parser::byte_at(data, STATUS_OFFSET)
}

/// Decode the reply to a Mifare authentication. Any non-zero status means
/// the key was rejected.
pub fn decode_authenticate(data: &[u8], block: u8) -> Result<()> {
    match status(data)? {
        0x00 => Ok(()),
        _ => Err(Error::AuthenticationFailed { block }),
    }
}

/// Decode the reply to a Mifare block read into the 16 data bytes.
pub fn decode_read_block(data: &[u8], block: u8) -> Result<BlockData> {
    let status = status(data)?;
    if status != 0x00 {
        return Err(Error::MifareStatus { block, status });
    }
    let bytes = parser::slice_at(data, DATA_OFFSET, crate::constants::MIFARE_BLOCK_LEN)?;
    BlockData::try_from(bytes)
}
