use log::warn;

use crate::device::Pn532;
use crate::protocol::{Command, Response};
use crate::types::BlockData;
use crate::{Error, Result};

/// Write one 16-byte block to the authenticated sector.
///
/// The reply is read but not checked: a non-zero status is only logged,
/// so a write into a sector that was never authenticated still returns
/// `Ok`. Callers that need certainty read the block back.
pub fn write_block(device: &mut Pn532, block: u8, data: &BlockData) -> Result<()> {
    let delay = device.config().block_settle_ms;
    let cmd = Command::MifareWrite { block, data: *data };

    match device.transceiver_mut().execute_with_delay(&cmd, delay)? {
        Response::Written { status } => {
            if status != 0x00 {
                warn!("write to block {} answered status {:#04x}", block, status);
            }
            Ok(())
        }
        other => Err(Error::FrameFormat(format!(
            "unexpected write reply: {:?}",
            other
        ))),
    }
}

/// Write `(block, data)` pairs in order. Not atomic: blocks written before
/// a failure stay written.
pub fn write_blocks(device: &mut Pn532, blocks: &[(u8, BlockData)]) -> Result<()> {
    for (block, data) in blocks {
        write_block(device, *block, data)?;
    }
    Ok(())
}
