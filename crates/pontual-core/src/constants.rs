//! Core constants for the Pontual attendance controller.
//!
//! These values bound the inputs the controller accepts (tag identifiers),
//! the physical display it renders to, and the time budget a single scan is
//! allowed to spend before the poll loop moves on.

// ============================================================================
// Tag Identifier Constraints
// ============================================================================

/// Minimum tag identifier length (characters).
///
/// A proximity card UID has at least 4 bytes (ISO 14443), so its decimal
/// rendering is never shorter than 4 characters; anything below this
/// threshold is rejected as malformed input.
///
/// # Value: 3 characters
pub const MIN_TAG_LENGTH: usize = 3;

/// Maximum tag identifier length (characters).
///
/// A 10-byte UID rendered byte-by-byte in decimal occupies at most 30
/// characters. The limit leaves a small margin while still bounding
/// lookup-key allocations.
///
/// # Value: 32 characters
pub const MAX_TAG_LENGTH: usize = 32;

// ============================================================================
// Display Geometry
// ============================================================================

/// Character columns on the attendance terminal LCD.
///
/// The controller targets a 1602-class character display (16x2). Message
/// constants are kept within this width so no line ever needs scrolling.
pub const LCD_COLUMNS: usize = 16;

/// Character lines on the attendance terminal LCD.
pub const LCD_LINES: usize = 2;

// ============================================================================
// Timeout Configuration
// ============================================================================

/// Default time budget for resolving and persisting one scan (milliseconds).
///
/// The reader loop has no concurrent progress path while a scan is in
/// flight, so a scan that cannot complete within this bound fails fast and
/// the loop returns to polling.
///
/// # Value: 3000ms (3 seconds)
pub const DEFAULT_SCAN_TIMEOUT_MS: u64 = 3000;

/// Minimum allowed scan timeout (milliseconds).
///
/// Values below this threshold cause spurious failures from ordinary
/// database latency.
///
/// # Value: 500ms
pub const MIN_SCAN_TIMEOUT_MS: u64 = 500;

/// Maximum allowed scan timeout (milliseconds).
///
/// Values above this threshold leave the terminal unresponsive for too
/// long when the store is down.
///
/// # Value: 10000ms (10 seconds)
pub const MAX_SCAN_TIMEOUT_MS: u64 = 10000;

// ============================================================================
// Display Timing
// ============================================================================

/// Default duration the scan result stays on the LCD (seconds).
///
/// After a scan the greeting and employee name are held on screen long
/// enough to be read before the terminal returns to idle.
///
/// # Value: 5 seconds
pub const DEFAULT_DISPLAY_HOLD_SECONDS: u64 = 5;
