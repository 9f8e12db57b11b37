// pn532-classic/src/ndef/sector.rs

use log::debug;

use crate::card::operations::read::read_blocks;
use crate::card::operations::write::write_blocks;
use crate::constants::{MAD_BLOCK_1, MAD_BLOCK_2, MAD_TRAILER, MIFARE_BLOCK_LEN, NDEF_TRAILER};
use crate::device::Pn532;
use crate::ndef::record::{decode_record, encode_sector_buffer, SECTOR_BUFFER_LEN};
use crate::ndef::tlv::extract_tlv;
use crate::types::{BlockData, Sector};
use crate::Result;

/// Write the MAD to sector 0: blocks 1 and 2 mark every sector as NDEF,
/// block 3 switches key A to the MAD key. Sector 0 must be authenticated.
/// Stops at the first failed write.
pub fn format_sector_zero(device: &mut Pn532) -> Result<()> {
    debug!("writing MAD to sector 0");
    write_blocks(
        device,
        &[
            (1, BlockData::from_bytes(MAD_BLOCK_1)),
            (2, BlockData::from_bytes(MAD_BLOCK_2)),
            (3, BlockData::from_bytes(MAD_TRAILER)),
        ],
    )
}

/// Store one record in `sector` and switch the sector to the NDEF key.
///
/// The sector and payload are validated before anything is sent. The four
/// block writes are not atomic: when one fails the earlier ones stay on the
/// tag. The sector must already be authenticated.
pub fn write_record(device: &mut Pn532, sector: u8, type_field: &[u8], payload: &[u8]) -> Result<()> {
    let sector = Sector::new(sector)?;
    let buf = encode_sector_buffer(type_field, payload)?;

    let mut blocks = Vec::with_capacity(4);
    for (block, chunk) in sector
        .data_blocks()
        .into_iter()
        .zip(buf.chunks_exact(MIFARE_BLOCK_LEN))
    {
        blocks.push((block, BlockData::try_from(chunk)?));
    }
    blocks.push((sector.trailer_block(), BlockData::from_bytes(NDEF_TRAILER)));

    debug!(
        "writing {} byte record to sector {}",
        payload.len(),
        sector.number()
    );
    write_blocks(device, &blocks)
}

/// Read the record stored in `sector` and return its text content. The
/// sector must already be authenticated.
pub fn read_record(device: &mut Pn532, sector: u8) -> Result<String> {
    let sector = Sector::new(sector)?;

    let mut buf = Vec::with_capacity(SECTOR_BUFFER_LEN);
    for block in read_blocks(device, &sector.data_blocks())? {
        buf.extend_from_slice(block.as_bytes());
    }
    decode_record(extract_tlv(&buf)?)
}
