// pn532-classic/src/transport/i2c.rs

//! I2C transport on top of the `embedded-hal` 1.0 traits.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PN532 on an I2C bus. Reads return the chip's leading ready byte as-is.
pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Talk to the chip at its fixed address 0x24.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, PN532_I2C_ADDRESS)
    }

    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Give the bus and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Transport for I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.i2c
            .write(self.address, data)
            .map_err(|e| Error::Bus(format!("i2c write: {:?}", e)))
    }

    fn receive(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|e| Error::Bus(format!("i2c read: {:?}", e)))?;
        Ok(buf)
    }

    fn delay_ms(&mut self, ms: u64) {
        self.delay.delay_ms(ms.min(u32::MAX as u64) as u32);
    }
}
