// pn532-classic/src/protocol/responses/mod.rs

pub mod mifare;
pub mod system;
pub mod target;

pub use mifare::{decode_authenticate, decode_read_block};
pub use system::{decode_firmware_version, decode_sam_configuration};
pub use target::decode_target;

use crate::protocol::commands::Command;
use crate::types::{BlockData, FirmwareVersion, Uid};

/// Reply sizes in bytes, status byte excluded
pub const FIRMWARE_VERSION_LEN: usize = 12;
pub const SAM_CONFIGURATION_LEN: usize = 8;
pub const TARGET_LIST_LEN: usize = 20;
pub const AUTHENTICATE_LEN: usize = 12;
pub const DATA_EXCHANGE_LEN: usize = 26;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    /// RFConfiguration is only acknowledged, its reply is never read
    Acknowledged,
    SamConfigured,
    Target {
        atqa: u16,
        sak: u8,
        uid: Uid,
    },
    Authenticated,
    Block(BlockData),
    /// Write replies are not validated; the status byte is kept for logging
    Written {
        status: u8,
    },
}

impl Response {
    /// Decode the raw reply (status byte already stripped) read back after
    /// `cmd` was acknowledged.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetFirmwareVersion => {
                decode_firmware_version(data).map(Self::FirmwareVersion)
            }
            Command::SetMaxRetries { .. } => Ok(Self::Acknowledged),
            Command::SamConfiguration { .. } => {
                decode_sam_configuration(data)?;
                Ok(Self::SamConfigured)
            }
            Command::InListPassiveTarget { .. } => {
                let (atqa, sak, uid) = decode_target(data)?;
                Ok(Self::Target { atqa, sak, uid })
            }
            Command::MifareAuthenticate { block, .. } => {
                decode_authenticate(data, *block)?;
                Ok(Self::Authenticated)
            }
            Command::MifareRead { block } => decode_read_block(data, *block).map(Self::Block),
            Command::MifareWrite { .. } => Ok(Self::Written {
                status: mifare::status(data).unwrap_or(0xFF),
            }),
        }
    }
}
