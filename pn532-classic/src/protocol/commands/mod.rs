// pn532-classic/src/protocol/commands/mod.rs

pub mod mifare;
pub mod system;
pub mod target;

pub use mifare::{encode_authenticate, encode_read_block, encode_write_block};
pub use system::{encode_get_firmware_version, encode_sam_configuration, encode_set_max_retries};
pub use target::encode_in_list_passive_target;

use crate::constants::*;
use crate::protocol::responses;
use crate::types::{BlockData, MifareKey, Uid};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SetMaxRetries {
        passive_activation: u8,
    },
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: u8,
    },
    InListPassiveTarget {
        max_targets: u8,
        brty: u8,
    },
    MifareAuthenticate {
        key: MifareKey,
        block: u8,
        uid: Uid,
    },
    MifareRead {
        block: u8,
    },
    MifareWrite {
        block: u8,
        data: BlockData,
    },
}

impl Command {
    /// Return the PN532 command code (first payload byte).
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SetMaxRetries { .. } => PN532_CMD_RF_CONFIGURATION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::MifareAuthenticate { .. } | Self::MifareRead { .. } | Self::MifareWrite { .. } => {
                PN532_CMD_IN_DATA_EXCHANGE
            }
        }
    }

    /// Encode the command into the raw payload (command code + params),
    /// without the D4 direction byte which the frame adds.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SetMaxRetries { passive_activation } => {
                encode_set_max_retries(*passive_activation)
            }
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, brty } => {
                encode_in_list_passive_target(*max_targets, *brty)
            }
            Self::MifareAuthenticate { key, block, uid } => encode_authenticate(key, *block, uid),
            Self::MifareRead { block } => encode_read_block(*block),
            Self::MifareWrite { block, data } => encode_write_block(*block, data),
        }
    }

    /// Number of bytes (status byte excluded) to read back after the ACK.
    /// The chip's replies have a fixed shape per command, so callers read
    /// exactly this many. `None` means the reply is not read at all.
    pub fn response_len(&self) -> Option<usize> {
        match self {
            Self::GetFirmwareVersion => Some(responses::FIRMWARE_VERSION_LEN),
            Self::SetMaxRetries { .. } => None,
            Self::SamConfiguration { .. } => Some(responses::SAM_CONFIGURATION_LEN),
            Self::InListPassiveTarget { .. } => Some(responses::TARGET_LIST_LEN),
            Self::MifareAuthenticate { .. } => Some(responses::AUTHENTICATE_LEN),
            Self::MifareRead { .. } | Self::MifareWrite { .. } => {
                Some(responses::DATA_EXCHANGE_LEN)
            }
        }
    }
}
