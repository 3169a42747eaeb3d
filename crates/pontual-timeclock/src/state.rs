//! Attendance state model.
//!
//! The state of one employee on one calendar day is fully determined by
//! that day's record:
//!
//! - no record -> `Absent`
//! - record with clock-on only -> `Present`
//! - record with both instants -> `Departed`
//!
//! # Valid Transitions
//!
//! - Absent -> Present (clock-on, creates the record)
//! - Present -> Departed (clock-off, fills the record)
//!
//! `Departed` is terminal for the date. There is no same-day reset: the
//! next calendar day uses a fresh `(employee, day)` key, which reads as
//! `Absent` again without any explicit state change.

use std::fmt;

use serde::{Deserialize, Serialize};

use pontual_storage::models::TimeRecord;

/// Attendance state of one employee on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceState {
    /// No record exists for the day.
    Absent,

    /// Clock-on registered, clock-off still pending.
    Present,

    /// Both instants registered; terminal for the day.
    Departed,
}

impl AttendanceState {
    /// Classify the state from the day's record, if any.
    ///
    /// Pure function of the record contents; performs no I/O.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontual_timeclock::AttendanceState;
    ///
    /// assert_eq!(AttendanceState::of(None), AttendanceState::Absent);
    /// ```
    #[must_use]
    pub fn of(record: Option<&TimeRecord>) -> Self {
        match record {
            None => AttendanceState::Absent,
            Some(r) if r.clock_off.is_none() => AttendanceState::Present,
            Some(_) => AttendanceState::Departed,
        }
    }

    /// Check if no further transition is possible for this date.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttendanceState::Departed)
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state_str = match self {
            AttendanceState::Absent => "Absent",
            AttendanceState::Present => "Present",
            AttendanceState::Departed => "Departed",
        };
        write!(f, "{}", state_str)
    }
}

/// Result of one attempted attendance transition.
#[derive(Debug, Clone)]
pub enum Transition {
    /// A new record was created with the clock-on instant.
    ClockedOn(TimeRecord),

    /// The existing record was closed with the clock-off instant.
    ClockedOff(TimeRecord),

    /// The day was already completed; nothing was mutated.
    Rejected,
}

impl Transition {
    /// The record this transition produced or updated, if any.
    #[must_use]
    pub fn record(&self) -> Option<&TimeRecord> {
        match self {
            Transition::ClockedOn(r) | Transition::ClockedOff(r) => Some(r),
            Transition::Rejected => None,
        }
    }

    /// Check if the transition was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Transition::Rejected)
    }

    /// Human-readable reason for a rejected transition.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&'static str> {
        match self {
            Transition::Rejected => Some("already completed for today"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    fn open_record() -> TimeRecord {
        TimeRecord {
            id: 1,
            employee_id: 1,
            dia: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            clock_on: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            clock_off: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_state_of_no_record_is_absent() {
        assert_eq!(AttendanceState::of(None), AttendanceState::Absent);
    }

    #[test]
    fn test_state_of_open_record_is_present() {
        let record = open_record();
        assert_eq!(
            AttendanceState::of(Some(&record)),
            AttendanceState::Present
        );
    }

    #[test]
    fn test_state_of_closed_record_is_departed() {
        let mut record = open_record();
        record.clock_off = Some(Utc.with_ymd_and_hms(2024, 1, 10, 17, 0, 0).unwrap());

        let state = AttendanceState::of(Some(&record));
        assert_eq!(state, AttendanceState::Departed);
        assert!(state.is_terminal());
    }

    #[rstest]
    #[case(AttendanceState::Absent, false)]
    #[case(AttendanceState::Present, false)]
    #[case(AttendanceState::Departed, true)]
    fn test_only_departed_is_terminal(#[case] state: AttendanceState, #[case] terminal: bool) {
        assert_eq!(state.is_terminal(), terminal);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(AttendanceState::Absent.to_string(), "Absent");
        assert_eq!(AttendanceState::Present.to_string(), "Present");
        assert_eq!(AttendanceState::Departed.to_string(), "Departed");
    }

    #[test]
    fn test_state_serialization() {
        let serialized = serde_json::to_string(&AttendanceState::Present).unwrap();
        assert_eq!(serialized, "\"present\"");

        let deserialized: AttendanceState = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, AttendanceState::Present);
    }

    #[test]
    fn test_transition_accessors() {
        let on = Transition::ClockedOn(open_record());
        assert!(on.record().is_some());
        assert!(!on.is_rejected());
        assert!(on.rejection_reason().is_none());

        let rejected = Transition::Rejected;
        assert!(rejected.record().is_none());
        assert!(rejected.is_rejected());
        assert_eq!(
            rejected.rejection_reason(),
            Some("already completed for today")
        );
    }
}
