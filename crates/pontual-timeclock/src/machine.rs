//! Attendance state machine.
//!
//! Decides, for one employee and one calendar day, what the next valid
//! transition is and applies the corresponding record mutation through the
//! storage repositories. The machine holds no record state of its own;
//! every decision starts from a fresh point lookup on the
//! `(employee, day)` key.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::warn;

use pontual_storage::StorageError;
use pontual_storage::repositories::{
    EmployeeRepository, SqliteEmployeeRepository, SqliteTimeRecordRepository, TimeRecordRepository,
};

use crate::error::TimeclockError;
use crate::state::{AttendanceState, Transition};

/// State machine over the daily attendance record lifecycle.
///
/// # Transition Rules
///
/// - `Absent` -> create the record with `clock_on = now` -> `ClockedOn`
/// - `Present` -> fill `clock_off = now` -> `ClockedOff`
/// - `Departed` -> no mutation -> `Rejected`
///
/// Repeating a scan in the departed state always returns `Rejected` and
/// never touches the record again.
///
/// # Concurrency
///
/// The reader loop delivers scans one at a time, but the store may have
/// other writers (an administrative correction tool, a second reader).
/// Both mutations are atomic single statements, so a lost race surfaces
/// as a conflict; the machine then re-reads and resolves against the
/// updated state. A same-second duplicate scan therefore observes the
/// first scan's applied mutation instead of being treated as simultaneous.
///
/// # Examples
///
/// ```no_run
/// use pontual_storage::{Database, DatabaseConfig};
/// use pontual_timeclock::{TimeclockMachine, Transition};
/// use pontual_core::work_date;
/// use chrono::Utc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Database::new(DatabaseConfig::new("pontual.db")).await?;
/// let machine = TimeclockMachine::new(db.pool().clone());
///
/// let now = Utc::now();
/// match machine.transition(42, work_date(&now), now).await? {
///     Transition::ClockedOn(record) => println!("welcome, on at {}", record.clock_on),
///     Transition::ClockedOff(_) => println!("goodbye"),
///     Transition::Rejected => println!("day already completed"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct TimeclockMachine {
    employees: SqliteEmployeeRepository,
    records: SqliteTimeRecordRepository,
}

impl TimeclockMachine {
    /// Create a new state machine over the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            employees: SqliteEmployeeRepository::new(pool.clone()),
            records: SqliteTimeRecordRepository::new(pool),
        }
    }

    /// Determine the employee's attendance state for the given day.
    ///
    /// One point read, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`TimeclockError::StoreUnavailable`] if the store cannot be
    /// read.
    pub async fn evaluate(
        &self,
        employee_id: i64,
        dia: NaiveDate,
    ) -> Result<AttendanceState, TimeclockError> {
        let record = self
            .records
            .find_by_employee_and_day(employee_id, dia)
            .await?;
        Ok(AttendanceState::of(record.as_ref()))
    }

    /// Apply the next valid transition for the employee on the given day.
    ///
    /// # Errors
    ///
    /// - [`TimeclockError::UnknownEmployee`] if the employee identifier
    ///   does not exist. Reached through the scan path this implies a
    ///   dangling tag attachment, which the caller logs as a defect.
    /// - [`TimeclockError::StoreUnavailable`] if the store cannot be read
    ///   or written. The failure is surfaced, never swallowed.
    pub async fn transition(
        &self,
        employee_id: i64,
        dia: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Transition, TimeclockError> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(TimeclockError::UnknownEmployee { employee_id });
        }

        // The state can only advance twice within one day (absent ->
        // present -> departed), so at most two attempts can lose a race
        // before the key reads as departed.
        for attempt in 0..3 {
            let record = self
                .records
                .find_by_employee_and_day(employee_id, dia)
                .await?;

            match AttendanceState::of(record.as_ref()) {
                AttendanceState::Absent => {
                    match self.records.insert_clock_on(employee_id, dia, now).await {
                        Ok(record) => return Ok(Transition::ClockedOn(record)),
                        Err(e) if e.is_conflict() => {
                            warn!(employee_id, %dia, attempt, "clock-on lost a race, re-evaluating");
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                AttendanceState::Present => {
                    match self.records.set_clock_off(employee_id, dia, now).await {
                        Ok(record) => return Ok(Transition::ClockedOff(record)),
                        Err(e) if e.is_conflict() => {
                            warn!(employee_id, %dia, attempt, "clock-off lost a race, re-evaluating");
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                AttendanceState::Departed => return Ok(Transition::Rejected),
            }
        }

        Err(TimeclockError::StoreUnavailable(StorageError::Conflict(
            "attendance record changed concurrently".to_string(),
        )))
    }
}
