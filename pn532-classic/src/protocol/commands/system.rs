// pn532-classic/src/protocol/commands/system.rs

use crate::constants::*;

/// Encode GetFirmwareVersion command payload (0x02)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_GET_FIRMWARE_VERSION]
}

/// Encode RFConfiguration item 5 (MaxRetries). Only the passive
/// activation retry count is configurable; ATR and PSL retries keep their
/// chip defaults.
pub fn encode_set_max_retries(passive_activation: u8) -> Vec<u8> {
    vec![
        PN532_CMD_RF_CONFIGURATION,
        RF_CONFIG_MAX_RETRIES,
        RF_MAX_RETRY_ATR,
        RF_MAX_RETRY_PSL,
        passive_activation,
    ]
}

/// Encode SAMConfiguration command payload (0x14)
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: u8) -> Vec<u8> {
    vec![PN532_CMD_SAM_CONFIGURATION, mode, timeout, use_irq]
}
