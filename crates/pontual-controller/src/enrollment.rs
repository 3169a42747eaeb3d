//! Tag enrollment.
//!
//! Reads one tag from the reader and attaches it to an employee. Runs
//! outside the scan path: the operator invokes it while the scan loop is
//! stopped.

use tokio_util::sync::CancellationToken;
use tracing::info;

use pontual_core::TagId;
use pontual_hardware::RfidDevice;
use pontual_timeclock::IdentityResolver;

use crate::error::ControllerError;

/// Wait for one tag and attach it to the employee with the given matricula.
///
/// Returns the enrolled tag identifier on success.
///
/// # Errors
///
/// - [`ControllerError::Cancelled`] if shutdown is requested before a tag
///   is presented.
/// - [`ControllerError::Enrollment`] if the tag is already attached to a
///   different employee or the matricula does not exist.
/// - [`ControllerError::Hardware`] / [`ControllerError::InvalidTag`] for
///   reader failures.
pub async fn enroll_tag<R: RfidDevice>(
    reader: &mut R,
    resolver: &IdentityResolver,
    matricula: &str,
    shutdown: &CancellationToken,
) -> Result<TagId, ControllerError> {
    info!(matricula, "waiting for a tag to enroll");

    let tag_data = tokio::select! {
        _ = shutdown.cancelled() => return Err(ControllerError::Cancelled),
        result = reader.read_tag() => result?,
    };

    let tag = TagId::new(&tag_data.uid_decimal())?;
    resolver.attach(matricula, &tag).await?;

    info!(matricula, tag = %tag, "tag enrolled");
    Ok(tag)
}
