// pn532-classic/src/lib.rs

//! pn532-classic
//!
//! Driver for PN532 NFC controllers talking to Mifare Classic tags:
//! chip handshake, ISO14443A target detection, sector authentication,
//! raw block I/O and NDEF Text/URI records stored in Mifare sectors.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
#[doc(hidden)]
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
