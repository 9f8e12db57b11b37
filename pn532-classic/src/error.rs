// pn532-classic/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("bus error: {0}")]
    Bus(String),

    #[error("no acknowledgement from chip")]
    NoAck,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected response at offset {offset}: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        offset: usize,
        expected: u8,
        actual: u8,
    },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("chip not found: firmware version reported no chip")]
    ChipNotFound,

    #[error("mifare error at block {block}: status={status:#04x}")]
    MifareStatus { block: u8, status: u8 },

    #[error("authentication failed for block {block}")]
    AuthenticationFailed { block: u8 },

    #[error("no target in field")]
    NoTarget,

    #[error("target is stale: a different tag was detected since")]
    StaleTarget,

    #[error("no NDEF message TLV found")]
    TlvNotFound,

    #[error("not an NDEF well-known short record: header=({header:#04x}, {type_length:#04x})")]
    InvalidRecordHeader { header: u8, type_length: u8 },

    #[error("unsupported record type: {0:#04x}")]
    UnsupportedRecordType(u8),

    #[error("record content is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("sector {0} out of range (1..=15)")]
    SectorOutOfRange(u8),

    #[error("payload length {len} out of range (1..={max})")]
    PayloadLength { len: usize, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure classes callers branch on, independent of the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing or garbage came back over the bus.
    BusFailure,
    /// The chip answered, but not with the expected bytes.
    ProtocolMismatch,
    /// No tag, no TLV, nothing to read.
    NotFound,
    /// The caller passed something out of bounds.
    Validation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Bus(_) | Error::NoAck => ErrorKind::BusFailure,
            Error::InvalidLength { .. }
            | Error::UnexpectedResponse { .. }
            | Error::FrameFormat(_)
            | Error::MifareStatus { .. }
            | Error::AuthenticationFailed { .. }
            | Error::InvalidRecordHeader { .. }
            | Error::UnsupportedRecordType(_)
            | Error::InvalidText(_) => ErrorKind::ProtocolMismatch,
            Error::ChipNotFound | Error::NoTarget | Error::TlvNotFound => ErrorKind::NotFound,
            Error::StaleTarget
            | Error::SectorOutOfRange(_)
            | Error::PayloadLength { .. }
            | Error::InvalidConfig(_) => ErrorKind::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
