// pn532-classic/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// UID of an ISO14443A target (4, 7 or 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Valid UID sizes: single (Classic), double (Ultralight), triple
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Big-endian value of a 4-byte UID. Longer UIDs have no 32-bit form.
    pub fn to_u32(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.0.as_slice().try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::AsRef)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Which of the two sector keys to authenticate with
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "A")]
    A = crate::constants::MIFARE_CMD_AUTH_A,
    #[display(fmt = "B")]
    B = crate::constants::MIFARE_CMD_AUTH_B,
}

impl KeyType {
    /// Mifare authentication opcode for this key
    pub fn auth_command(self) -> u8 {
        self as u8
    }
}

/// MifareKey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MifareKey {
    pub kind: KeyType,
    pub secret: [u8; 6],
}

impl MifareKey {
    /// Factory key `FF FF FF FF FF FF` as key A
    pub const DEFAULT: Self = Self::a(crate::constants::KEY_DEFAULT);
    /// NDEF data sector key `D3 F7 D3 F7 D3 F7` as key A
    pub const NDEF: Self = Self::a(crate::constants::KEY_NDEF);
    /// MAD sector key `A0 A1 A2 A3 A4 A5` as key A
    pub const MAD: Self = Self::a(crate::constants::KEY_MAD);

    pub const fn a(secret: [u8; 6]) -> Self {
        Self {
            kind: KeyType::A,
            secret,
        }
    }

    pub const fn b(secret: [u8; 6]) -> Self {
        Self {
            kind: KeyType::B,
            secret,
        }
    }
}

/// Mifare Classic 1K sector usable for NDEF data (1..=15). Sector 0 holds
/// the MAD and never carries user payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sector(u8);

impl Sector {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 15;

    pub fn new(number: u8) -> crate::Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(Error::SectorOutOfRange(number));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn first_block(&self) -> u8 {
        self.0 * 4
    }

    /// The three blocks holding the NDEF TLV
    pub fn data_blocks(&self) -> [u8; 3] {
        let first = self.first_block();
        [first, first + 1, first + 2]
    }

    pub fn trailer_block(&self) -> u8 {
        self.first_block() + 3
    }
}

impl TryFrom<u8> for Sector {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

/// Firmware version packed as reported by GetFirmwareVersion:
/// IC (chip family) in the top byte, then version, revision and the
/// supported-protocol bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "PN5{:x} v{}.{}", ic, version, revision)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl FirmwareVersion {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            ic: bytes[0],
            version: bytes[1],
            revision: bytes[2],
            support: bytes[3],
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_bytes(value.to_be_bytes())
    }

    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes([self.ic, self.version, self.revision, self.support])
    }

    /// Chip family byte (0x32 for PN532). Zero means no chip answered.
    pub fn chip_family(&self) -> u8 {
        self.ic
    }
}
