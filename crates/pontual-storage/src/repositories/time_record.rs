#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::TimeRecord;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

/// Repository trait for TimeRecord entity operations
///
/// The attendance record lifecycle is enforced here rather than in the
/// callers: clock-on is create-only and clock-off fills an open record
/// exactly once. Both mutations are single SQL statements, so they are
/// atomic against any other writer without application-level locking.
///
/// # Implementation Note
///
/// This trait uses native async trait methods (Edition 2024 feature),
/// eliminating the need for the async-trait crate while maintaining
/// full async/await support in trait methods.
pub trait TimeRecordRepository: Send + Sync {
    /// Point lookup for the record of one employee on one day
    async fn find_by_employee_and_day(
        &self,
        employee_id: i64,
        dia: NaiveDate,
    ) -> StorageResult<Option<TimeRecord>>;

    /// Create the day's record with the clock-on instant
    ///
    /// Create-only: fails with [`StorageError::Conflict`] if a record
    /// already exists for `(employee_id, dia)`. The conflict comes from
    /// the unique constraint, so two writers racing on the same key
    /// cannot both clock on.
    async fn insert_clock_on(
        &self,
        employee_id: i64,
        dia: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> StorageResult<TimeRecord>;

    /// Fill the clock-off instant on the day's open record
    ///
    /// Fails with [`StorageError::Conflict`] if no record exists for the
    /// key or the clock-off is already set. The update itself guards with
    /// `clock_off IS NULL`, so the field is filled at most once.
    async fn set_clock_off(
        &self,
        employee_id: i64,
        dia: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> StorageResult<TimeRecord>;

    /// Recent records for one employee, newest first
    async fn find_by_employee(
        &self,
        employee_id: i64,
        limit: i64,
    ) -> StorageResult<Vec<TimeRecord>>;

    /// All records for one calendar day
    async fn find_by_day(&self, dia: NaiveDate) -> StorageResult<Vec<TimeRecord>>;
}

/// SQLite implementation of TimeRecordRepository
pub struct SqliteTimeRecordRepository {
    pool: SqlitePool,
}

impl SqliteTimeRecordRepository {
    /// Create a new SQLite time record repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_by_key(
        &self,
        employee_id: i64,
        dia: NaiveDate,
    ) -> StorageResult<TimeRecord> {
        let record = sqlx::query_as::<_, TimeRecord>(
            r#"
            SELECT id, employee_id, dia, clock_on, clock_off, created_at, updated_at
            FROM time_records
            WHERE employee_id = ? AND dia = ?
            "#,
        )
        .bind(employee_id)
        .bind(dia)
        .fetch_optional(&self.pool)
        .await?;

        record.ok_or_else(|| StorageError::NotFound {
            entity_type: "TimeRecord".to_string(),
            field: "employee_id,dia".to_string(),
            value: format!("{},{}", employee_id, dia),
        })
    }
}

impl TimeRecordRepository for SqliteTimeRecordRepository {
    async fn find_by_employee_and_day(
        &self,
        employee_id: i64,
        dia: NaiveDate,
    ) -> StorageResult<Option<TimeRecord>> {
        let record = sqlx::query_as::<_, TimeRecord>(
            r#"
            SELECT id, employee_id, dia, clock_on, clock_off, created_at, updated_at
            FROM time_records
            WHERE employee_id = ? AND dia = ?
            "#,
        )
        .bind(employee_id)
        .bind(dia)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert_clock_on(
        &self,
        employee_id: i64,
        dia: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> StorageResult<TimeRecord> {
        sqlx::query(
            r#"
            INSERT INTO time_records (employee_id, dia, clock_on)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(employee_id)
        .bind(dia)
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::conflict_on_unique(e, "attendance record already exists for this day")
        })?;

        self.fetch_by_key(employee_id, dia).await
    }

    async fn set_clock_off(
        &self,
        employee_id: i64,
        dia: NaiveDate,
        timestamp: DateTime<Utc>,
    ) -> StorageResult<TimeRecord> {
        let result = sqlx::query(
            r#"
            UPDATE time_records
            SET clock_off = ?, updated_at = datetime('now')
            WHERE employee_id = ? AND dia = ? AND clock_off IS NULL
            "#,
        )
        .bind(timestamp)
        .bind(employee_id)
        .bind(dia)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Conflict(
                "no open attendance record for this day".to_string(),
            ));
        }

        self.fetch_by_key(employee_id, dia).await
    }

    async fn find_by_employee(
        &self,
        employee_id: i64,
        limit: i64,
    ) -> StorageResult<Vec<TimeRecord>> {
        let records = sqlx::query_as::<_, TimeRecord>(
            r#"
            SELECT id, employee_id, dia, clock_on, clock_off, created_at, updated_at
            FROM time_records
            WHERE employee_id = ?
            ORDER BY dia DESC
            LIMIT ?
            "#,
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_day(&self, dia: NaiveDate) -> StorageResult<Vec<TimeRecord>> {
        let records = sqlx::query_as::<_, TimeRecord>(
            r#"
            SELECT id, employee_id, dia, clock_on, clock_off, created_at, updated_at
            FROM time_records
            WHERE dia = ?
            ORDER BY clock_on
            "#,
        )
        .bind(dia)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
