use crate::device::Pn532;
use crate::protocol::{Command, Response};
use crate::types::BlockData;
use crate::{Error, Result};

/// Read one 16-byte block from the authenticated sector.
pub fn read_block(device: &mut Pn532, block: u8) -> Result<BlockData> {
    let delay = device.config().block_settle_ms;
    let cmd = Command::MifareRead { block };

    match device.transceiver_mut().execute_with_delay(&cmd, delay)? {
        Response::Block(data) => Ok(data),
        other => Err(Error::FrameFormat(format!(
            "unexpected read reply: {:?}",
            other
        ))),
    }
}

/// Read consecutive blocks, stopping at the first failure.
pub fn read_blocks(device: &mut Pn532, blocks: &[u8]) -> Result<Vec<BlockData>> {
    blocks.iter().map(|&b| read_block(device, b)).collect()
}
