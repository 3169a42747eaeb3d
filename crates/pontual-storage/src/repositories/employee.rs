#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::Employee;
use sqlx::SqlitePool;

/// Repository trait for Employee entity operations
///
/// This trait defines the contract for employee data access, enabling
/// testability through mock implementations and separation of concerns.
///
/// # Implementation Note
///
/// This trait uses native async trait methods (Edition 2024 feature),
/// eliminating the need for the async-trait crate while maintaining
/// full async/await support in trait methods.
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by their ID
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Employee>>;

    /// Find an employee by their matricula (registration number)
    async fn find_by_matricula(&self, matricula: &str) -> StorageResult<Option<Employee>>;

    /// Find the active employee a tag identifier is attached to
    ///
    /// Inactive employees are excluded, so a tag belonging to a
    /// deactivated account reads as unattached.
    async fn find_by_tag(&self, tag_id: &str) -> StorageResult<Option<Employee>>;

    /// Get all active employees
    async fn find_all_active(&self) -> StorageResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(&self, employee: &Employee) -> StorageResult<i64>;

    /// Attach a tag identifier to an employee
    ///
    /// Single atomic UPDATE. Fails with [`StorageError::Conflict`] if the
    /// tag is already attached to another employee (unique constraint) and
    /// with [`StorageError::NotFound`] if the employee does not exist.
    async fn attach_tag(&self, employee_id: i64, tag_id: &str) -> StorageResult<()>;

    /// Check if a matricula already exists
    async fn exists_by_matricula(&self, matricula: &str) -> StorageResult<bool>;
}

/// SQLite implementation of EmployeeRepository
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new SQLite employee repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, matricula, nome, tag_id, ativo, created_at, updated_at
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_matricula(&self, matricula: &str) -> StorageResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, matricula, nome, tag_id, ativo, created_at, updated_at
            FROM employees
            WHERE matricula = ?
            "#,
        )
        .bind(matricula)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_tag(&self, tag_id: &str) -> StorageResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, matricula, nome, tag_id, ativo, created_at, updated_at
            FROM employees
            WHERE tag_id = ? AND ativo = 1
            "#,
        )
        .bind(tag_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_all_active(&self) -> StorageResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, matricula, nome, tag_id, ativo, created_at, updated_at
            FROM employees
            WHERE ativo = 1
            ORDER BY nome
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn create(&self, employee: &Employee) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (matricula, nome, tag_id, ativo)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.matricula)
        .bind(&employee.nome)
        .bind(&employee.tag_id)
        .bind(employee.ativo)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, "matricula or tag already registered")
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn attach_tag(&self, employee_id: i64, tag_id: &str) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET tag_id = ?, updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(tag_id)
        .bind(employee_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, "tag already attached to another employee")
        })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "Employee".to_string(),
                field: "id".to_string(),
                value: employee_id.to_string(),
            });
        }

        Ok(())
    }

    async fn exists_by_matricula(&self, matricula: &str) -> StorageResult<bool> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employees WHERE matricula = ?")
                .bind(matricula)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0 > 0)
    }
}
