// pn532-classic/src/transport/mod.rs

#[cfg(feature = "i2c")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "i2c")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
