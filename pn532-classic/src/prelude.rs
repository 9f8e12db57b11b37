// pn532-classic/src/prelude.rs

pub use crate::card::Card;
pub use crate::device::{DeviceBuilder, DriverConfig, Initialized, Pn532};
pub use crate::ndef::{RecordKind, UriPrefix};
pub use crate::protocol::{Command, Response};
pub use crate::transport::Transport;
pub use crate::{
    BlockData, Error, ErrorKind, FirmwareVersion, KeyType, MifareKey, Result, Sector, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{default_settle_delay, ms};
