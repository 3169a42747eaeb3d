use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Daily attendance record for one employee and one calendar day
///
/// A record is created only by a successful clock-on (with `clock_off`
/// absent), mutated exactly once by the clock-off that fills it, and never
/// deleted. At most one record exists per `(employee_id, dia)` pair.
///
/// # Fields
///
/// * `id` - Auto-increment primary key
/// * `employee_id` - Owning employee (technical key FK)
/// * `dia` - Calendar day key (system-local date, no time component)
/// * `clock_on` - Arrival instant, set at creation
/// * `clock_off` - Departure instant, absent until the clock-off scan
/// * `created_at` - When the record was written to the database
/// * `updated_at` - Last modification timestamp
///
/// # Invariant
///
/// `clock_off` never exists without `clock_on`: the schema requires
/// `clock_on NOT NULL` at insert, and `clock_off` is only ever filled on an
/// existing record. The dual timestamp strategy separates the event
/// instants (`clock_on`/`clock_off`, from the scan) from the bookkeeping
/// timestamps (`created_at`/`updated_at`, from the database).
///
/// # Examples
///
/// ```
/// use pontual_storage::models::TimeRecord;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let record = TimeRecord {
///     id: 1,
///     employee_id: 42,
///     dia: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     clock_on: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
///     clock_off: None,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// assert!(record.is_open());
/// assert!(record.worked_duration().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TimeRecord {
    /// Auto-increment primary key
    pub id: i64,

    /// Owning employee's ID
    pub employee_id: i64,

    /// Calendar day key (system-local date)
    pub dia: NaiveDate,

    /// Arrival instant, set when the record is created
    pub clock_on: DateTime<Utc>,

    /// Departure instant, absent until the clock-off scan
    pub clock_off: Option<DateTime<Utc>>,

    /// Record creation timestamp (database time)
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp (database time)
    pub updated_at: DateTime<Utc>,
}

impl TimeRecord {
    /// Check if the employee is still clocked on (no departure yet)
    pub fn is_open(&self) -> bool {
        self.clock_off.is_none()
    }

    /// Check if the record is complete for the day
    pub fn is_closed(&self) -> bool {
        self.clock_off.is_some()
    }

    /// Time worked between clock-on and clock-off
    ///
    /// Returns `None` while the record is still open.
    pub fn worked_duration(&self) -> Option<Duration> {
        self.clock_off.map(|off| off - self.clock_on)
    }
}
