// pn532-classic/src/device/detector.rs

use log::{debug, warn};

use crate::card::Card;
use crate::constants::{INLIST_BRTY_106A, INLIST_MAX_TARGETS};
use crate::device::session::Initialized;
use crate::device::transceiver::Transceiver;
use crate::protocol::{Command, Response};
use crate::types::Uid;
use crate::{Error, Result};

/// Whether an InListPassiveTarget command is outstanding on the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorState {
    /// No command outstanding; the next poll sends one.
    #[default]
    Idle,
    /// A command was sent and the chip is still looking for a tag.
    Listening,
}

impl DetectorState {
    /// A poll from this state has to send the list command first.
    pub fn needs_command(self) -> bool {
        self == DetectorState::Idle
    }

    /// State after a reply was read. `found` is false only when the chip
    /// reported zero tags; every other reply ends the outstanding command.
    pub fn after_reply(self, found: bool) -> Self {
        if found {
            DetectorState::Idle
        } else {
            DetectorState::Listening
        }
    }
}

fn list_command() -> Command {
    Command::InListPassiveTarget {
        max_targets: INLIST_MAX_TARGETS,
        brty: INLIST_BRTY_106A,
    }
}

/// Polls for one ISO14443A target at 106 kbps.
///
/// The chip keeps searching after it acknowledged the list command, so a
/// poll that finds nothing leaves the command outstanding and the next poll
/// only reads again.
#[derive(Debug, Default)]
pub struct TargetDetector {
    state: DetectorState,
    current: Option<Uid>,
}

impl TargetDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// UID of the target the last successful poll returned.
    pub fn current_uid(&self) -> Option<&Uid> {
        self.current.as_ref()
    }

    pub fn is_current(&self, uid: &Uid) -> bool {
        self.current.as_ref() == Some(uid)
    }

    /// Drop the outstanding command and the remembered target.
    pub fn forget(&mut self) {
        self.state = DetectorState::Idle;
        self.current = None;
    }

    pub fn poll(&mut self, xcvr: &mut Transceiver, _session: &Initialized) -> Result<Card> {
        let cmd = list_command();
        if self.state.needs_command() {
            if let Err(e) = xcvr.send_and_ack(&cmd.encode()) {
                warn!("InListPassiveTarget not acknowledged: {}", e);
            }
            self.state = DetectorState::Listening;
        }

        let len = cmd.response_len().unwrap_or_default();
        let raw = xcvr.read_response(len)?;

        let decoded = Response::decode(&cmd, &raw);
        self.state = self
            .state
            .after_reply(!matches!(decoded, Err(Error::NoTarget)));

        match decoded? {
            Response::Target { atqa, sak, uid } => {
                debug!(
                    "target found: uid={:02X?} atqa={:#06x} sak={:#04x}",
                    uid.as_bytes(),
                    atqa,
                    sak
                );
                self.current = Some(uid.clone());
                Ok(Card::new(uid, atqa, sak))
            }
            other => Err(Error::FrameFormat(format!(
                "unexpected target reply: {:?}",
                other
            ))),
        }
    }
}
