// pn532-classic/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod detector;
pub mod handle;
pub mod session;
pub mod transceiver;

pub use builder::DeviceBuilder;
pub use config::DriverConfig;
pub use detector::{DetectorState, TargetDetector};
pub use handle::Pn532;
pub use session::{ChipSession, Initialized};
pub use transceiver::Transceiver;
