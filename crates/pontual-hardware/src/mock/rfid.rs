//! Mock RFID reader implementation for testing and development.
//!
//! This module provides a simulated tag reader that can be controlled
//! programmatically for testing without requiring physical hardware.

use crate::{
    Result,
    traits::{RfidDevice, TagData},
    types::ReaderInfo,
};
use tokio::sync::mpsc;

/// Mock RFID reader for testing and development.
///
/// Tag presentations are injected through the paired [`MockRfidHandle`];
/// `read_tag` resolves in presentation order, one tag per call, matching
/// the sequential scan stream of a physical reader.
///
/// # Examples
///
/// ```
/// use pontual_hardware::mock::MockRfid;
/// use pontual_hardware::traits::RfidDevice;
///
/// #[tokio::main]
/// async fn main() -> pontual_hardware::Result<()> {
///     let (mut reader, handle) = MockRfid::new();
///
///     handle.present_tag(vec![0x04, 0xAB, 0xCD, 0xEF]).await?;
///
///     let tag = reader.read_tag().await?;
///     assert_eq!(tag.uid_hex(), "04ABCDEF");
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRfid {
    /// Channel receiver for tag events
    event_rx: mpsc::Receiver<TagData>,

    /// Device name
    name: String,
}

impl MockRfid {
    /// Create a new mock RFID reader with the default name.
    ///
    /// Returns a tuple of (MockRfid, MockRfidHandle) where the handle
    /// can be used to simulate tag presentations.
    pub fn new() -> (Self, MockRfidHandle) {
        Self::with_name("Mock RFID Reader".to_string())
    }

    /// Create a new mock RFID reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockRfidHandle) {
        let (event_tx, event_rx) = mpsc::channel(32);

        let reader = Self {
            event_rx,
            name: name.clone(),
        };

        let handle = MockRfidHandle { event_tx, name };

        (reader, handle)
    }
}

impl RfidDevice for MockRfid {
    async fn read_tag(&mut self) -> Result<TagData> {
        self.event_rx
            .recv()
            .await
            .ok_or_else(|| crate::HardwareError::disconnected("RFID event channel closed"))
    }

    async fn is_tag_present(&self) -> Result<bool> {
        // Best-effort check against pending events
        Ok(!self.event_rx.is_empty())
    }

    async fn reader_info(&self) -> Result<ReaderInfo> {
        Ok(ReaderInfo::new(
            self.name.clone(),
            vec!["ISO14443A".to_string()],
        )
        .with_max_baud_rate(424000))
    }
}

/// Handle for controlling a mock RFID reader.
///
/// Dropping the last handle closes the event channel, which the reader
/// reports as a disconnect. This doubles as the shutdown path in tests.
#[derive(Debug, Clone)]
pub struct MockRfidHandle {
    /// Channel sender for tag events
    event_tx: mpsc::Sender<TagData>,

    /// Device name
    name: String,
}

impl MockRfidHandle {
    /// Present a tag to the reader.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The UID length is outside the valid 4-10 byte range
    /// - The reader has been dropped and the channel is closed
    pub async fn present_tag(&self, uid: Vec<u8>) -> Result<()> {
        let tag = TagData::new(uid)?;

        self.event_tx
            .send(tag)
            .await
            .map_err(|_| crate::HardwareError::disconnected("RFID event channel closed"))
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_rfid_present_and_read() {
        let (mut reader, handle) = MockRfid::new();

        handle.present_tag(vec![0x04, 0xAB, 0xCD, 0xEF]).await.unwrap();

        let tag = reader.read_tag().await.unwrap();
        assert_eq!(tag.uid_hex(), "04ABCDEF");
    }

    #[tokio::test]
    async fn test_mock_rfid_reads_in_presentation_order() {
        let (mut reader, handle) = MockRfid::new();

        handle.present_tag(vec![0x01, 0x02, 0x03, 0x04]).await.unwrap();
        handle.present_tag(vec![0x05, 0x06, 0x07, 0x08]).await.unwrap();

        assert!(reader.is_tag_present().await.unwrap());

        let first = reader.read_tag().await.unwrap();
        assert_eq!(first.uid_hex(), "01020304");

        let second = reader.read_tag().await.unwrap();
        assert_eq!(second.uid_hex(), "05060708");
    }

    #[tokio::test]
    async fn test_mock_rfid_rejects_invalid_uid() {
        let (_reader, handle) = MockRfid::new();

        let result = handle.present_tag(vec![0x01]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_rfid_disconnect_on_handle_drop() {
        let (mut reader, handle) = MockRfid::new();
        drop(handle);

        let result = reader.read_tag().await;
        assert!(matches!(
            result,
            Err(crate::HardwareError::Disconnected { .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_rfid_reader_info() {
        let (reader, _handle) = MockRfid::with_name("Test Reader".to_string());

        let info = reader.reader_info().await.unwrap();
        assert_eq!(info.name, "Test Reader");
        assert!(info.protocols.contains(&"ISO14443A".to_string()));
        assert_eq!(info.max_baud_rate, Some(424000));
    }
}
