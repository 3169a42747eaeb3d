//! Hardware abstraction for the Pontual attendance terminal.
//!
//! This crate defines the trait contracts between the controller and its
//! peripherals (proximity tag reader, character LCD) and provides mock
//! implementations for development and testing without physical hardware.
//! Real device backends (SPI reader, I2C display backpack) are gated
//! behind the `hardware-*` feature flags.

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

pub use error::{HardwareError, Result};
pub use traits::{LcdDevice, RfidDevice, TagData};
pub use types::ReaderInfo;
