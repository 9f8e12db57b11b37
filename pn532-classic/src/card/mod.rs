// pn532-classic/src/card/mod.rs

use crate::device::Pn532;
use crate::types::{BlockData, MifareKey, Uid};
use crate::Result;

pub mod operations;

/// An ISO14443A target returned by a successful poll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    uid: Uid,
    atqa: u16,
    sak: u8,
}

impl Card {
    pub fn new(uid: Uid, atqa: u16, sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// SENS_RES
    pub fn atqa(&self) -> u16 {
        self.atqa
    }

    /// SEL_RES
    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// Authenticate the sector holding `block`.
    pub fn authenticate(&self, device: &mut Pn532, block: u8, key: &MifareKey) -> Result<()> {
        operations::authenticate_block(device, self, block, key)
    }

    pub fn read_block(&self, device: &mut Pn532, block: u8) -> Result<BlockData> {
        operations::read_block(device, block)
    }

    pub fn write_block(&self, device: &mut Pn532, block: u8, data: &BlockData) -> Result<()> {
        operations::write_block(device, block, data)
    }
}
