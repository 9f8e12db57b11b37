use log::debug;

use crate::card::Card;
use crate::device::Pn532;
use crate::protocol::{Command, Response};
use crate::types::MifareKey;
use crate::{Error, Result};

/// Authenticate the sector containing `block` with `key`. The card must be
/// the one the detector returned last; a rejected key is
/// `AuthenticationFailed` and the tag has to be polled again before another
/// attempt.
pub fn authenticate_block(
    device: &mut Pn532,
    card: &Card,
    block: u8,
    key: &MifareKey,
) -> Result<()> {
    if !device.detector().is_current(card.uid()) {
        return Err(Error::StaleTarget);
    }

    let cmd = Command::MifareAuthenticate {
        key: *key,
        block,
        uid: card.uid().clone(),
    };
    match device.transceiver_mut().execute(&cmd)? {
        Response::Authenticated => {
            debug!("authenticated block {} with key {}", block, key.kind);
            Ok(())
        }
        _ => Err(Error::AuthenticationFailed { block }),
    }
}
