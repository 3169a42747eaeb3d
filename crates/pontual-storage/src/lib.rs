//! Storage layer for the Pontual attendance controller.
//!
//! This crate provides SQLite-backed persistence for employees and their
//! daily attendance records. It owns record storage exclusively: callers
//! hold only `(employee, day)` keys and go through repositories for every
//! read and write.
//!
//! # Architecture
//!
//! The storage layer uses a repository pattern with the following components:
//!
//! - [`Database`] - Connection pool manager with automatic migrations
//! - [`EmployeeRepository`], [`TimeRecordRepository`] - Data access traits
//!
//! # Atomicity
//!
//! Each attendance mutation is a single SQL statement:
//!
//! - clock-on is a plain INSERT, so the `UNIQUE (employee_id, dia)`
//!   constraint rejects a second create for the same day instead of
//!   racing a read-then-write sequence;
//! - clock-off is an UPDATE guarded by `clock_off IS NULL`, so it can
//!   fill the field exactly once.
//!
//! Concurrent writers (an administrative correction tool, a second reader)
//! therefore cannot double-apply either half of a record. Conflicts
//! surface as [`StorageError::Conflict`] for the caller to re-evaluate.
//!
//! # Examples
//!
//! ```no_run
//! use pontual_storage::{Database, DatabaseConfig};
//! use pontual_storage::repositories::{EmployeeRepository, SqliteEmployeeRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatabaseConfig::new("pontual.db").auto_migrate(true);
//! let db = Database::new(config).await?;
//!
//! let repo = SqliteEmployeeRepository::new(db.pool().clone());
//! if let Some(employee) = repo.find_by_matricula("EMP001").await? {
//!     println!("Found employee: {}", employee.nome);
//! }
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{StorageError, StorageResult};
pub use models::{Employee, TimeRecord};
pub use repositories::{
    EmployeeRepository, SqliteEmployeeRepository, SqliteTimeRecordRepository, TimeRecordRepository,
};
