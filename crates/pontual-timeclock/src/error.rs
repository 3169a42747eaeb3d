use pontual_storage::StorageError;
use thiserror::Error;

/// Errors from the attendance state machine.
///
/// Rejected transitions are not errors: a scan in the departed state
/// returns [`Transition::Rejected`](crate::state::Transition::Rejected)
/// successfully. Errors here mean the machine could not decide at all.
#[derive(Debug, Error)]
pub enum TimeclockError {
    /// The employee identifier did not resolve.
    ///
    /// This should not occur when the machine is called after successful
    /// identity resolution; it implies a tag attachment pointing at a
    /// missing employee and is logged as a defect by the caller.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee { employee_id: i64 },

    /// The persistence layer could not be read or written.
    ///
    /// Never swallowed: the coordinator surfaces it instead of guessing a
    /// state, and the reader loop keeps polling.
    #[error("Attendance store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}

/// Errors from identity resolution and tag enrollment.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The tag is already attached to a different employee.
    #[error("Tag {tag} is already attached to another employee")]
    DuplicateTag { tag: String },

    /// No employee exists with the given matricula.
    #[error("Unknown employee: {matricula}")]
    UnknownEmployee { matricula: String },

    /// The directory could not be read or written.
    #[error("Employee directory unavailable: {0}")]
    Store(#[from] StorageError),
}
