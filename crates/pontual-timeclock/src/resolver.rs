//! Identity resolution for scanned tags.

use sqlx::SqlitePool;
use tracing::info;

use pontual_core::TagId;
use pontual_storage::models::Employee;
use pontual_storage::repositories::{EmployeeRepository, SqliteEmployeeRepository};

use crate::error::ResolverError;

/// Maps opaque tag identifiers to employees.
///
/// Resolution is a point lookup against the employee directory; the tag
/// value is never parsed for content. Attachment enforces the
/// reject-on-conflict policy: a tag held by one employee must be detached
/// before it can be assigned to another, so two employees can never
/// reference the same tag, not even transiently.
pub struct IdentityResolver {
    employees: SqliteEmployeeRepository,
}

impl IdentityResolver {
    /// Create a new resolver over the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            employees: SqliteEmployeeRepository::new(pool),
        }
    }

    /// Resolve a tag identifier to the employee it is attached to.
    ///
    /// Returns `Ok(None)` for tags that are not attached to any active
    /// employee.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Store`] if the directory cannot be read.
    pub async fn resolve(&self, tag: &TagId) -> Result<Option<Employee>, ResolverError> {
        Ok(self.employees.find_by_tag(tag.as_str()).await?)
    }

    /// Attach a tag to an employee identified by matricula.
    ///
    /// Re-enrolling the tag an employee already holds is a no-op success.
    ///
    /// # Errors
    ///
    /// - [`ResolverError::UnknownEmployee`] if no employee has the given
    ///   matricula.
    /// - [`ResolverError::DuplicateTag`] if the tag is attached to a
    ///   different employee. The existing attachment is left untouched.
    /// - [`ResolverError::Store`] if the directory cannot be written.
    pub async fn attach(&self, matricula: &str, tag: &TagId) -> Result<(), ResolverError> {
        let employee = self
            .employees
            .find_by_matricula(matricula)
            .await?
            .ok_or_else(|| ResolverError::UnknownEmployee {
                matricula: matricula.to_string(),
            })?;

        if employee.tag_id.as_deref() == Some(tag.as_str()) {
            return Ok(());
        }

        match self.employees.attach_tag(employee.id, tag.as_str()).await {
            Ok(()) => {
                info!(matricula, tag = %tag, "tag attached to employee");
                Ok(())
            }
            Err(e) if e.is_conflict() => Err(ResolverError::DuplicateTag {
                tag: tag.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
