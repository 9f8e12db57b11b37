// pn532-classic/src/device/session.rs

use log::{debug, info, warn};

use crate::constants::{SAM_MODE_NORMAL, SAM_TIMEOUT_1S, SAM_USE_IRQ};
use crate::device::transceiver::Transceiver;
use crate::protocol::{Command, Response};
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Proof that the chip answered the handshake and has been configured.
/// Only `ChipSession::initialize` can create one; target detection
/// requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialized {
    firmware: FirmwareVersion,
}

impl Initialized {
    pub(crate) fn new(firmware: FirmwareVersion) -> Self {
        Self { firmware }
    }

    pub fn firmware(&self) -> FirmwareVersion {
        self.firmware
    }
}

/// Chip handshake and configuration state.
///
/// Once `initialize` succeeds the token is kept for the lifetime of the
/// session and the sequence is never re-run; after a failure every call
/// retries the full sequence. A physically reset chip needs `invalidate`.
#[derive(Debug)]
pub struct ChipSession {
    initialized: Option<Initialized>,
    max_retries: u8,
}

impl ChipSession {
    pub fn new(max_retries: u8) -> Self {
        Self {
            initialized: None,
            max_retries,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.is_some()
    }

    pub fn token(&self) -> Option<Initialized> {
        self.initialized
    }

    /// Adopt a token obtained elsewhere, e.g. a fixture that skips the
    /// handshake.
    pub(crate) fn mark_initialized(&mut self, token: Initialized) {
        self.initialized = Some(token);
    }

    /// Forget the initialized state so the next entry point redoes the
    /// handshake.
    pub fn invalidate(&mut self) {
        self.initialized = None;
    }

    /// GetFirmwareVersion. A reply with the wrong prefix is a protocol
    /// mismatch, which callers treat as "no chip".
    pub fn get_firmware_version(&self, xcvr: &mut Transceiver) -> Result<FirmwareVersion> {
        match xcvr.execute(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(fw) => Ok(fw),
            other => Err(Error::FrameFormat(format!(
                "unexpected firmware reply: {:?}",
                other
            ))),
        }
    }

    /// RFConfiguration MaxRetries; only the ACK is checked.
    pub fn set_passive_activation_retries(
        &self,
        xcvr: &mut Transceiver,
        max_retries: u8,
    ) -> Result<()> {
        xcvr.execute(&Command::SetMaxRetries {
            passive_activation: max_retries,
        })
        .map(|_| ())
    }

    /// SAMConfiguration: normal mode, 1 s timeout, IRQ pin in use.
    pub fn configure_sam(&self, xcvr: &mut Transceiver) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: SAM_TIMEOUT_1S,
            use_irq: SAM_USE_IRQ,
        };
        match xcvr.execute(&cmd)? {
            Response::SamConfigured => Ok(()),
            other => Err(Error::FrameFormat(format!(
                "unexpected SAM reply: {:?}",
                other
            ))),
        }
    }

    /// Firmware check, retry configuration, SAM configuration. Failures of
    /// the two configuration steps are logged and do not abort: a chip that
    /// ignored them simply will not find targets later.
    pub fn initialize(&mut self, xcvr: &mut Transceiver) -> Result<Initialized> {
        if let Some(token) = self.initialized {
            return Ok(token);
        }

        let firmware = self.get_firmware_version(xcvr)?;
        if firmware.chip_family() == 0 {
            return Err(Error::ChipNotFound);
        }
        info!("found chip {} (support {:#04x})", firmware, firmware.support);

        if let Err(e) = self.set_passive_activation_retries(xcvr, self.max_retries) {
            warn!("setting passive activation retries failed: {}", e);
        }
        if let Err(e) = self.configure_sam(xcvr) {
            warn!("SAM configuration failed: {}", e);
        }

        let token = Initialized::new(firmware);
        self.initialized = Some(token);
        debug!("chip session initialized");
        Ok(token)
    }
}
