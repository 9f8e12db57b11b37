//! Delay helpers used across the crate.
//!
//! The PN532 is driven without polling its ready line: every transfer is
//! followed by a fixed settle delay instead. The defaults live here so the
//! driver configuration and tests agree on them.

use std::time::Duration;

/// Settle delay after every bus write and read, in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// Extra delay after an acknowledged block write or read so the tag can
/// finish the EEPROM operation, in milliseconds.
pub const DEFAULT_BLOCK_SETTLE_MS: u64 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default settle delay as Duration.
pub fn default_settle_delay() -> Duration {
    ms(DEFAULT_SETTLE_DELAY_MS)
}
