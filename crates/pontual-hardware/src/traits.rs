//! Hardware device trait definitions.
//!
//! These traits establish the contract between the attendance controller
//! and its peripherals (proximity tag reader, character LCD), enabling
//! substitution between mock and real hardware implementations.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024
//! RPITIT), eliminating the need for the `async_trait` macro. They are
//! therefore not object-safe; use generic type parameters:
//!
//! ```no_run
//! use pontual_hardware::traits::RfidDevice;
//! use pontual_hardware::error::Result;
//!
//! async fn next_scan<R: RfidDevice>(reader: &mut R) -> Result<String> {
//!     let tag = reader.read_tag().await?;
//!     Ok(tag.uid_decimal())
//! }
//! ```

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::ReaderInfo;

/// Minimum UID length in bytes (per ISO 14443 specification).
pub const MIN_UID_LENGTH: usize = 4;

/// Maximum UID length in bytes (per ISO 14443 specification).
pub const MAX_UID_LENGTH: usize = 10;

/// Proximity tag data.
///
/// Contains the unique identifier read from a tag together with the
/// instant it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagData {
    /// Tag unique identifier (4-10 bytes).
    pub uid: Vec<u8>,

    /// Timestamp when the tag was read.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl TagData {
    /// Create new tag data with the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the UID length is not within the valid range
    /// of 4-10 bytes as specified by ISO 14443.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontual_hardware::traits::TagData;
    ///
    /// let tag = TagData::new(vec![0x04, 0xAB, 0xCD, 0xEF]).unwrap();
    /// assert_eq!(tag.uid_hex(), "04ABCDEF");
    /// ```
    pub fn new(uid: Vec<u8>) -> Result<Self> {
        Self::read_at(uid, chrono::Utc::now())
    }

    /// Create tag data with an explicit read instant.
    ///
    /// Useful in tests and when replaying historical events.
    ///
    /// # Errors
    ///
    /// Returns an error if the UID length is not within 4-10 bytes.
    pub fn read_at(uid: Vec<u8>, timestamp: chrono::DateTime<chrono::Utc>) -> Result<Self> {
        let uid_len = uid.len();
        if !(MIN_UID_LENGTH..=MAX_UID_LENGTH).contains(&uid_len) {
            return Err(crate::HardwareError::invalid_data(format!(
                "Tag UID length must be between {} and {} bytes, got {}",
                MIN_UID_LENGTH, MAX_UID_LENGTH, uid_len
            )));
        }

        Ok(Self { uid, timestamp })
    }

    /// Get the UID as a hexadecimal string.
    pub fn uid_hex(&self) -> String {
        self.uid
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join("")
    }

    /// Get the UID as a decimal string.
    ///
    /// Joins each byte's decimal representation, matching the identifier
    /// format used when tags were first enrolled on the legacy terminals
    /// (e.g. `[13, 62, 0, 52]` becomes `"1362052"`). The result is a
    /// lookup key only and is never parsed back.
    pub fn uid_decimal(&self) -> String {
        self.uid
            .iter()
            .map(|b| b.to_string())
            .collect::<String>()
    }
}

/// RFID tag reader abstraction.
///
/// Represents a proximity card reader that detects and reads tags. The
/// reader is the sole scan event source: callers await one tag at a time
/// and must not issue overlapping reads.
pub trait RfidDevice: Send + Sync {
    /// Read a tag from the reader.
    ///
    /// Blocks asynchronously until a tag is presented to the reader.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tag cannot be read (communication error)
    /// - The device is disconnected
    async fn read_tag(&mut self) -> Result<TagData>;

    /// Check if a tag is currently present on the reader.
    ///
    /// This is a non-blocking check that returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while checking
    /// for tag presence.
    async fn is_tag_present(&self) -> Result<bool>;

    /// Get reader information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// reader information.
    async fn reader_info(&self) -> Result<ReaderInfo>;
}

/// Character LCD abstraction (1602-class, two lines).
///
/// Lines longer than the panel width are truncated by the device.
pub trait LcdDevice: Send + Sync {
    /// Render two lines of text, replacing the current content.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    async fn show(&mut self, line1: &str, line2: &str) -> Result<()>;

    /// Clear the display.
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be written.
    async fn clear(&mut self) -> Result<()>;

    /// Switch the backlight on or off.
    ///
    /// # Errors
    ///
    /// Returns an error if the device does not support backlight control
    /// or cannot be written.
    async fn set_backlight(&mut self, enabled: bool) -> Result<()>;
}
