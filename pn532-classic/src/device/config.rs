// pn532-classic/src/device/config.rs

//! Driver configuration

use crate::types::Sector;
use crate::utils::{DEFAULT_BLOCK_SETTLE_MS, DEFAULT_SETTLE_DELAY_MS};
use crate::{Error, Result};

/// Passive activation retries set during initialization. 0xFF is the
/// hardware maximum and bounds how long InListPassiveTarget stalls
/// chip-side.
pub const DEFAULT_MAX_RETRIES: u8 = 0xFF;

/// Sector the combined NDEF read/write flows use
pub const DEFAULT_NDEF_SECTOR: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Delay after every bus write and read (ms)
    pub settle_delay_ms: u64,
    /// Delay between a block command's ACK and its reply (ms)
    pub block_settle_ms: u64,
    /// Passive activation retry count written at initialization
    pub max_retries: u8,
    /// Sector used by `write_tag_payload` / `read_tag_payload`
    pub ndef_sector: u8,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            block_settle_ms: DEFAULT_BLOCK_SETTLE_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            ndef_sector: DEFAULT_NDEF_SECTOR,
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<()> {
        Sector::new(self.ndef_sector).map_err(|_| {
            Error::InvalidConfig(format!("ndef_sector {} out of range", self.ndef_sector))
        })?;
        Ok(())
    }

    pub fn ndef_sector(&self) -> Result<Sector> {
        Sector::new(self.ndef_sector)
    }
}
