//! Attendance decision core for the Pontual controller.
//!
//! This crate holds the only decision logic in the repository: given a tag
//! identifier and a scan instant, decide what the next valid attendance
//! transition is and what persisted record it produces. Everything around
//! it (reader polling, LCD rendering, enrollment prompts) is peripheral
//! plumbing that calls into [`ScanCoordinator::handle_scan`].
//!
//! # Flow
//!
//! ```text
//! raw tag id -> IdentityResolver -> employee
//!            -> TimeclockMachine (reads/writes via pontual-storage)
//!            -> ScanOutcome (presentation-neutral result)
//! ```
//!
//! Scans are processed strictly one at a time by the reader loop, so the
//! common path needs no locking; the storage layer still keeps each record
//! mutation atomic against other writers.

pub mod coordinator;
pub mod error;
pub mod machine;
pub mod messages;
pub mod resolver;
pub mod state;

pub use coordinator::{MessageClass, ScanCoordinator, ScanOutcome};
pub use error::{ResolverError, TimeclockError};
pub use machine::TimeclockMachine;
pub use messages::DisplayMessages;
pub use resolver::IdentityResolver;
pub use state::{AttendanceState, Transition};
