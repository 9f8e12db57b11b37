// pn532-classic/src/device/builder.rs

use crate::device::config::DriverConfig;
use crate::device::handle::Pn532;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a `Pn532` with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DriverConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    pub fn block_settle_ms(mut self, ms: u64) -> Self {
        self.config.block_settle_ms = ms;
        self
    }

    pub fn max_retries(mut self, retries: u8) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn ndef_sector(mut self, sector: u8) -> Self {
        self.config.ndef_sector = sector;
        self
    }

    /// Validate the configuration and return an uninitialized driver.
    pub fn build(self) -> Result<Pn532> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidConfig("no transport provided".into()))?;
        Pn532::with_config(transport, self.config)
    }
}
