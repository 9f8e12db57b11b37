// pn532-classic/src/protocol/commands/mifare.rs

use crate::constants::*;
use crate::types::{BlockData, MifareKey, Uid};

fn data_exchange(mifare_cmd: u8, block: u8) -> Vec<u8> {
    vec![
        PN532_CMD_IN_DATA_EXCHANGE,
        DATA_EXCHANGE_TARGET,
        mifare_cmd,
        block,
    ]
}

/// Encode a Mifare authentication wrapped in InDataExchange:
/// 40 01 (60|61) block key[6] uid[n]
pub fn encode_authenticate(key: &MifareKey, block: u8, uid: &Uid) -> Vec<u8> {
    let mut buf = data_exchange(key.kind.auth_command(), block);
    buf.extend_from_slice(&key.secret);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode a Mifare 16-byte block read: 40 01 30 block
pub fn encode_read_block(block: u8) -> Vec<u8> {
    data_exchange(MIFARE_CMD_READ, block)
}

/// Encode a Mifare 16-byte block write: 40 01 A0 block data[16]
pub fn encode_write_block(block: u8, data: &BlockData) -> Vec<u8> {
    let mut buf = data_exchange(MIFARE_CMD_WRITE, block);
    buf.extend_from_slice(data.as_bytes());
    buf
}
