//! Shared hardware metadata types.

use serde::{Deserialize, Serialize};

/// Metadata about an RFID reader device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderInfo {
    /// Human-readable device name.
    pub name: String,

    /// Supported card protocols (e.g. "ISO14443A").
    pub protocols: Vec<String>,

    /// Maximum communication baud rate, if known.
    pub max_baud_rate: Option<u32>,
}

impl ReaderInfo {
    /// Create reader info with the given name and protocols.
    pub fn new(name: String, protocols: Vec<String>) -> Self {
        Self {
            name,
            protocols,
            max_baud_rate: None,
        }
    }

    /// Set the maximum baud rate.
    #[must_use]
    pub fn with_max_baud_rate(mut self, baud_rate: u32) -> Self {
        self.max_baud_rate = Some(baud_rate);
        self
    }
}
