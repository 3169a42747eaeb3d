//! Scan orchestration.
//!
//! [`ScanCoordinator`] is the single entry point peripheral I/O calls into:
//! one `(tag, instant)` event in, one [`ScanOutcome`] out. The outcome is
//! the whole contract handed to presentation collaborators (LCD, logs);
//! the coordinator itself never touches a device.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tokio::time::timeout;
use tracing::{error, info, warn};

use pontual_core::{TagId, constants::DEFAULT_SCAN_TIMEOUT_MS, work_date};

use crate::error::TimeclockError;
use crate::machine::TimeclockMachine;
use crate::messages::DisplayMessages;
use crate::resolver::IdentityResolver;
use crate::state::Transition;

/// Intent class of the message shown for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageClass {
    /// Clock-on applied.
    Welcome,

    /// Clock-off applied.
    Farewell,

    /// Rejected: the day was already completed.
    AlreadyDeparted,

    /// The tag is not attached to any employee.
    UnknownCard,

    /// The scan could not be processed.
    Error,
}

impl MessageClass {
    /// The LCD line for this message class.
    #[must_use]
    pub fn display_message(&self) -> &'static str {
        match self {
            MessageClass::Welcome => DisplayMessages::WELCOME,
            MessageClass::Farewell => DisplayMessages::FAREWELL,
            MessageClass::AlreadyDeparted => DisplayMessages::ALREADY_DEPARTED,
            MessageClass::UnknownCard => DisplayMessages::UNKNOWN_CARD,
            MessageClass::Error => DisplayMessages::ERROR,
        }
    }

    /// Check if this class corresponds to an applied record mutation.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(self, MessageClass::Welcome | MessageClass::Farewell)
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class_str = match self {
            MessageClass::Welcome => "Welcome",
            MessageClass::Farewell => "Farewell",
            MessageClass::AlreadyDeparted => "AlreadyDeparted",
            MessageClass::UnknownCard => "UnknownCard",
            MessageClass::Error => "Error",
        };
        write!(f, "{}", class_str)
    }
}

/// Presentation-neutral result of one scan event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Display name of the resolved employee, if any.
    pub nome: Option<String>,

    /// Intent class of the user-facing message.
    pub message: MessageClass,

    /// The instant used for the scan.
    pub timestamp: DateTime<Utc>,
}

impl ScanOutcome {
    fn new(nome: Option<String>, message: MessageClass, timestamp: DateTime<Utc>) -> Self {
        Self {
            nome,
            message,
            timestamp,
        }
    }

    /// The two LCD lines for this outcome: message, then employee name.
    #[must_use]
    pub fn display_lines(&self) -> (String, String) {
        (
            self.message.display_message().to_string(),
            self.nome.clone().unwrap_or_default(),
        )
    }
}

/// Orchestrates one scan event end-to-end.
///
/// Steps: resolve the tag, compute the local work date, run the attendance
/// transition under a bounded timeout, and map the result into a
/// [`ScanOutcome`]. `handle_scan` is infallible: every failure becomes an
/// outcome, so the reader loop survives and keeps polling after store
/// failures, unknown cards and dangling attachments alike.
///
/// # Examples
///
/// ```no_run
/// use pontual_storage::{Database, DatabaseConfig};
/// use pontual_timeclock::{MessageClass, ScanCoordinator};
/// use pontual_core::TagId;
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Database::new(DatabaseConfig::new("pontual.db")).await?;
/// let coordinator = ScanCoordinator::new(db.pool().clone());
///
/// let tag = TagId::new("136205211224")?;
/// let outcome = coordinator.handle_scan(&tag, Utc::now()).await;
///
/// if outcome.message == MessageClass::Welcome {
///     println!("good morning, {}", outcome.nome.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ScanCoordinator {
    resolver: IdentityResolver,
    machine: TimeclockMachine,
    scan_timeout: Duration,
}

impl ScanCoordinator {
    /// Create a new coordinator over the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            resolver: IdentityResolver::new(pool.clone()),
            machine: TimeclockMachine::new(pool),
            scan_timeout: Duration::from_millis(DEFAULT_SCAN_TIMEOUT_MS),
        }
    }

    /// Set the time budget for resolving and persisting one scan
    pub fn with_scan_timeout(mut self, scan_timeout: Duration) -> Self {
        self.scan_timeout = scan_timeout;
        self
    }

    /// The resolver backing this coordinator (shared with enrollment).
    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Process one scan event.
    ///
    /// Infallible: failures are mapped to [`MessageClass::UnknownCard`] or
    /// [`MessageClass::Error`] outcomes rather than returned as errors.
    /// Unresolved tags perform no attendance-store access at all.
    ///
    /// Both the identity lookup and the attendance transition run under
    /// the scan time budget: the reader loop has no concurrent progress
    /// path, so a slow store must fail fast rather than block polling.
    pub async fn handle_scan(&self, tag: &TagId, now: DateTime<Utc>) -> ScanOutcome {
        let employee = match timeout(self.scan_timeout, self.resolver.resolve(tag)).await {
            Ok(Ok(Some(employee))) => employee,
            Ok(Ok(None)) => {
                warn!(tag = %tag, "scanned tag is not attached to any employee");
                return ScanOutcome::new(None, MessageClass::UnknownCard, now);
            }
            Ok(Err(e)) => {
                error!(tag = %tag, error = %e, "identity resolution failed");
                return ScanOutcome::new(None, MessageClass::Error, now);
            }
            Err(_) => {
                error!(
                    tag = %tag,
                    timeout_ms = self.scan_timeout.as_millis() as u64,
                    "identity resolution timed out"
                );
                return ScanOutcome::new(None, MessageClass::Error, now);
            }
        };

        let dia = work_date(&now);

        let transition = match timeout(
            self.scan_timeout,
            self.machine.transition(employee.id, dia, now),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                error!(
                    employee_id = employee.id,
                    timeout_ms = self.scan_timeout.as_millis() as u64,
                    "scan timed out against the attendance store"
                );
                return ScanOutcome::new(Some(employee.nome), MessageClass::Error, now);
            }
        };

        match transition {
            Ok(Transition::ClockedOn(record)) => {
                info!(
                    employee_id = employee.id,
                    dia = %dia,
                    clock_on = %record.clock_on,
                    "employee clocked on"
                );
                ScanOutcome::new(Some(employee.nome), MessageClass::Welcome, now)
            }
            Ok(Transition::ClockedOff(record)) => {
                info!(
                    employee_id = employee.id,
                    dia = %dia,
                    clock_off = %now,
                    worked_minutes = record.worked_duration().map(|d| d.num_minutes()),
                    "employee clocked off"
                );
                ScanOutcome::new(Some(employee.nome), MessageClass::Farewell, now)
            }
            Ok(Transition::Rejected) => {
                info!(
                    employee_id = employee.id,
                    dia = %dia,
                    "scan rejected, day already completed"
                );
                ScanOutcome::new(Some(employee.nome), MessageClass::AlreadyDeparted, now)
            }
            Err(TimeclockError::UnknownEmployee { employee_id }) => {
                // A resolved tag pointing at a missing employee is a
                // directory defect, not a user mistake.
                error!(employee_id, tag = %tag, "tag attached to a missing employee");
                ScanOutcome::new(None, MessageClass::Error, now)
            }
            Err(TimeclockError::StoreUnavailable(e)) => {
                error!(employee_id = employee.id, error = %e, "attendance store unavailable");
                ScanOutcome::new(Some(employee.nome), MessageClass::Error, now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_class_display_messages() {
        assert_eq!(MessageClass::Welcome.display_message(), "Bem-vindo");
        assert_eq!(MessageClass::Farewell.display_message(), "Ate logo");
        assert_eq!(
            MessageClass::AlreadyDeparted.display_message(),
            "Ja encerrado"
        );
        assert_eq!(MessageClass::UnknownCard.display_message(), "Nao cadastrado");
        assert_eq!(MessageClass::Error.display_message(), "Falha no ponto");
    }

    #[test]
    fn test_message_class_is_transition() {
        assert!(MessageClass::Welcome.is_transition());
        assert!(MessageClass::Farewell.is_transition());
        assert!(!MessageClass::AlreadyDeparted.is_transition());
        assert!(!MessageClass::UnknownCard.is_transition());
        assert!(!MessageClass::Error.is_transition());
    }

    #[test]
    fn test_outcome_display_lines() {
        let outcome = ScanOutcome::new(
            Some("Joana Silva".to_string()),
            MessageClass::Welcome,
            Utc::now(),
        );
        let (line1, line2) = outcome.display_lines();
        assert_eq!(line1, "Bem-vindo");
        assert_eq!(line2, "Joana Silva");
    }

    #[test]
    fn test_outcome_display_lines_without_name() {
        let outcome = ScanOutcome::new(None, MessageClass::UnknownCard, Utc::now());
        let (line1, line2) = outcome.display_lines();
        assert_eq!(line1, "Nao cadastrado");
        assert_eq!(line2, "");
    }

    #[test]
    fn test_message_class_serialization() {
        let serialized = serde_json::to_string(&MessageClass::AlreadyDeparted).unwrap();
        assert_eq!(serialized, "\"already_departed\"");

        let deserialized: MessageClass = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, MessageClass::AlreadyDeparted);
    }
}
