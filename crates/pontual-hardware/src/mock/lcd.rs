//! Mock character LCD implementation for testing and development.

use crate::{Result, traits::LcdDevice};

/// Panel width of the emulated 1602 display (characters per line).
const PANEL_COLUMNS: usize = 16;

/// Mock 16x2 character LCD.
///
/// Records every rendered frame so tests can assert on what the terminal
/// would have shown. Like the physical panel, lines wider than 16
/// characters are truncated.
///
/// # Examples
///
/// ```
/// use pontual_hardware::mock::MockLcd;
/// use pontual_hardware::traits::LcdDevice;
///
/// #[tokio::main]
/// async fn main() -> pontual_hardware::Result<()> {
///     let mut lcd = MockLcd::new();
///
///     lcd.show("Bem-vindo", "Joana Silva").await?;
///     assert_eq!(
///         lcd.last_frame(),
///         Some(&("Bem-vindo".to_string(), "Joana Silva".to_string()))
///     );
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct MockLcd {
    frames: Vec<(String, String)>,
    backlight: bool,
    cleared: bool,
}

impl MockLcd {
    /// Create a new mock LCD with backlight off and no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames rendered so far, oldest first.
    pub fn frames(&self) -> &[(String, String)] {
        &self.frames
    }

    /// The most recently rendered frame, if any.
    pub fn last_frame(&self) -> Option<&(String, String)> {
        self.frames.last()
    }

    /// Current backlight state.
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Check if the display is currently cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    fn truncate(line: &str) -> String {
        line.chars().take(PANEL_COLUMNS).collect()
    }
}

impl LcdDevice for MockLcd {
    async fn show(&mut self, line1: &str, line2: &str) -> Result<()> {
        self.frames
            .push((Self::truncate(line1), Self::truncate(line2)));
        self.cleared = false;
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.cleared = true;
        Ok(())
    }

    async fn set_backlight(&mut self, enabled: bool) -> Result<()> {
        self.backlight = enabled;
        Ok(())
    }
}
