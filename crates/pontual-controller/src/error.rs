use thiserror::Error;

use pontual_hardware::HardwareError;
use pontual_timeclock::ResolverError;

/// Errors from the controller layer (scan loop and enrollment).
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A peripheral could not be read or written.
    #[error("Hardware failure: {0}")]
    Hardware(#[from] HardwareError),

    /// Tag enrollment was refused by the identity resolver.
    #[error("Enrollment failed: {0}")]
    Enrollment(#[from] ResolverError),

    /// The reader produced a tag that does not form a valid identifier.
    #[error("Invalid tag read: {0}")]
    InvalidTag(#[from] pontual_core::Error),

    /// Shutdown was requested before the operation completed.
    #[error("Cancelled before completion")]
    Cancelled,
}
