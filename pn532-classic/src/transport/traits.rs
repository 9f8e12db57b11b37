// pn532-classic/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts bus I/O away from protocol/device logic.
///
/// Reads return exactly the requested number of raw bytes; on I2C the
/// first of them is the chip's ready/status byte, which the transceiver
/// strips.
pub trait Transport {
    /// Write a complete frame to the chip
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read `len` raw bytes from the chip
    fn receive(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Block for `ms` milliseconds. Transports on platforms without
    /// `std::thread` should override this with their own delay source.
    fn delay_ms(&mut self, ms: u64) {
        std::thread::sleep(crate::utils::ms(ms));
    }

    /// Perform a transport-level reset
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}
