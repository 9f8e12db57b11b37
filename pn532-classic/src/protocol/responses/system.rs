// pn532-classic/src/protocol/responses/system.rs

use crate::constants::{PN532_FIRMWARE_PREFIX, PN532_RESP_SAM_CONFIGURATION};
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Offset of the IC byte in a GetFirmwareVersion reply
pub const FIRMWARE_IC_OFFSET: usize = 7;
/// Offset of the response code in a SAMConfiguration reply
pub const SAM_RESPONSE_OFFSET: usize = 6;

/// Decode GetFirmwareVersion reply
/// Layout: 00 00 FF 06 FA D5 03 IC Ver Rev Support DCS
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::expect_prefix(data, &PN532_FIRMWARE_PREFIX)?;
    let raw = parser::slice_at(data, FIRMWARE_IC_OFFSET, 4)?;
    Ok(FirmwareVersion::from_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Decode SAMConfiguration reply: byte 6 must be the 0x15 response code
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::expect_byte(data, SAM_RESPONSE_OFFSET, PN532_RESP_SAM_CONFIGURATION)
}
