use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee entity with an optional attached proximity tag
///
/// # Fields
///
/// * `id` - Auto-increment primary key (technical key for FK performance)
/// * `matricula` - Unique employee registration number (natural key, 3-20 chars)
/// * `nome` - Full name, maximum 100 characters, required
/// * `tag_id` - Attached proximity tag identifier, at most one per employee
/// * `ativo` - Whether the employee account is active
/// * `created_at` - Record creation timestamp
/// * `updated_at` - Record last modification timestamp
///
/// # Database Schema
///
/// Maps to the `employees` table with the following constraints:
/// - `matricula` must be unique
/// - `tag_id` must be unique: a tag identifier resolves to at most one
///   employee at a time. Attaching a tag that another employee already
///   holds fails at the database level rather than silently leaving the
///   old attachment dangling.
///
/// # Examples
///
/// ```
/// use pontual_storage::models::Employee;
/// use chrono::Utc;
///
/// let employee = Employee {
///     id: 1,
///     matricula: "EMP001".to_string(),
///     nome: "Joana Silva".to_string(),
///     tag_id: Some("136205211224".to_string()),
///     ativo: true,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// assert!(employee.has_tag());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// Auto-increment primary key (technical key for FK performance)
    pub id: i64,

    /// Unique employee registration number (natural key, 3-20 chars)
    ///
    /// This is the primary identifier used by operators and for lookups.
    pub matricula: String,

    /// Full name (max 100 characters)
    pub nome: String,

    /// Attached proximity tag identifier (at most one per employee)
    ///
    /// `None` until a tag is enrolled for this employee.
    pub tag_id: Option<String>,

    /// Whether the employee is active (can clock on and off)
    pub ativo: bool,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Check if the employee has a proximity tag attached
    pub fn has_tag(&self) -> bool {
        self.tag_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: 1,
            matricula: "EMP001".to_string(),
            nome: "Joana Silva".to_string(),
            tag_id: Some("136205211224".to_string()),
            ativo: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_tag() {
        let employee = create_test_employee();
        assert!(employee.has_tag());
    }

    #[test]
    fn test_no_tag() {
        let mut employee = create_test_employee();
        employee.tag_id = None;
        assert!(!employee.has_tag());
    }
}
