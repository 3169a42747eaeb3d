//! Mock peripheral implementations for testing and development.

pub mod lcd;
pub mod rfid;

pub use lcd::MockLcd;
pub use rfid::{MockRfid, MockRfidHandle};
