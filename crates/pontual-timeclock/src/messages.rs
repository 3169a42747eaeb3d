//! Display messages for scan outcomes
//!
//! This module provides constants for all messages shown on the attendance
//! terminal LCD. All messages are in Portuguese (Brazilian) as required by
//! the deployment market.

/// Display messages for scan outcomes (Portuguese/Brazilian)
///
/// Messages are rendered on the terminal's first LCD line, with the
/// employee name on the second line when one is known.
///
/// # Message Format
///
/// - Maximum 16 characters (one LCD line, hardware limitation)
/// - ASCII characters only (no UTF-8 accents to ensure hardware
///   compatibility)
pub struct DisplayMessages;

impl DisplayMessages {
    /// Clock-on succeeded; the employee's working day has started.
    pub const WELCOME: &'static str = "Bem-vindo";

    /// Clock-off succeeded; the employee's working day is complete.
    pub const FAREWELL: &'static str = "Ate logo";

    /// Scan rejected: the employee already clocked off today.
    pub const ALREADY_DEPARTED: &'static str = "Ja encerrado";

    /// The tag is not attached to any employee.
    pub const UNKNOWN_CARD: &'static str = "Nao cadastrado";

    /// The scan could not be processed (store failure or timeout).
    pub const ERROR: &'static str = "Falha no ponto";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pontual_core::constants::LCD_COLUMNS;

    const ALL_MESSAGES: [&str; 5] = [
        DisplayMessages::WELCOME,
        DisplayMessages::FAREWELL,
        DisplayMessages::ALREADY_DEPARTED,
        DisplayMessages::UNKNOWN_CARD,
        DisplayMessages::ERROR,
    ];

    /// Ensures all message constants have content (no empty strings)
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_messages_are_non_empty() {
        for message in ALL_MESSAGES {
            assert!(!message.is_empty());
        }
    }

    /// Messages must fit one LCD line without scrolling
    #[test]
    fn test_messages_fit_display() {
        for message in ALL_MESSAGES {
            assert!(message.len() <= LCD_COLUMNS, "too wide: {message}");
        }
    }

    /// ASCII only, for hardware compatibility
    #[test]
    fn test_messages_are_ascii() {
        for message in ALL_MESSAGES {
            assert!(message.is_ascii(), "not ASCII: {message}");
        }
    }
}
