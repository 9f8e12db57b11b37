// pn532-classic/src/device/handle.rs

use crate::card::{operations, Card};
use crate::device::config::DriverConfig;
use crate::device::detector::TargetDetector;
use crate::device::session::{ChipSession, Initialized};
use crate::device::transceiver::Transceiver;
use crate::transport::Transport;
use crate::types::{BlockData, FirmwareVersion, MifareKey, Uid};
use crate::Result;

/// A PN532 on one bus. Owns the transport and all per-chip state; every
/// operation takes `&mut self`, so only one exchange is ever in flight.
pub struct Pn532 {
    xcvr: Transceiver,
    session: ChipSession,
    detector: TargetDetector,
    config: DriverConfig,
}

impl Pn532 {
    /// Create a driver with the default configuration. Nothing is sent to
    /// the chip until the first operation.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::from_parts(transport, DriverConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: DriverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(transport, config))
    }

    pub(crate) fn from_parts(transport: Box<dyn Transport>, config: DriverConfig) -> Self {
        Self {
            xcvr: Transceiver::new(transport, config.settle_delay_ms),
            session: ChipSession::new(config.max_retries),
            detector: TargetDetector::new(),
            config,
        }
    }

    /// Run the chip handshake once. Later calls return the cached token
    /// without touching the bus.
    pub fn initialize(&mut self) -> Result<Initialized> {
        self.session.initialize(&mut self.xcvr)
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_initialized()
    }

    pub(crate) fn mark_initialized(&mut self, token: Initialized) {
        self.session.mark_initialized(token);
    }

    /// Query the firmware version directly, independent of initialization.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.session.get_firmware_version(&mut self.xcvr)
    }

    /// Initialize if needed, then poll once for a target in the field.
    pub fn read_passive_target(&mut self) -> Result<Card> {
        let token = self.initialize()?;
        self.detector.poll(&mut self.xcvr, &token)
    }

    /// UID of the tag in the field.
    pub fn read_uid(&mut self) -> Result<Uid> {
        self.read_passive_target().map(|card| card.uid().clone())
    }

    pub fn authenticate(&mut self, card: &Card, block: u8, key: &MifareKey) -> Result<()> {
        operations::authenticate_block(self, card, block, key)
    }

    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        operations::read_block(self, block)
    }

    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        operations::write_block(self, block, data)
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn detector(&self) -> &TargetDetector {
        &self.detector
    }

    pub fn transceiver_mut(&mut self) -> &mut Transceiver {
        &mut self.xcvr
    }

    /// Forget the handshake and any outstanding target command, e.g. after
    /// the chip was power-cycled.
    pub fn reset(&mut self) -> Result<()> {
        self.session.invalidate();
        self.detector.forget();
        self.xcvr.transport_mut().reset()
    }

    pub fn into_transport(self) -> Box<dyn Transport> {
        self.xcvr.into_transport()
    }
}
