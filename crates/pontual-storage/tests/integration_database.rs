//! Integration tests exercising the storage layer against a real database
//! file, including migrations and the full record lifecycle across both
//! repositories.

use chrono::{NaiveDate, TimeZone, Utc};
use pontual_storage::models::Employee;
use pontual_storage::repositories::{
    EmployeeRepository, SqliteEmployeeRepository, SqliteTimeRecordRepository, TimeRecordRepository,
};
use pontual_storage::{Database, DatabaseConfig, StorageError};

fn test_employee(matricula: &str, nome: &str, tag_id: Option<&str>) -> Employee {
    Employee {
        id: 0,
        matricula: matricula.to_string(),
        nome: nome.to_string(),
        tag_id: tag_id.map(|t| t.to_string()),
        ativo: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_file_database_with_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pontual.db");

    let config = DatabaseConfig::new(path.to_str().unwrap())
        .max_connections(2)
        .auto_migrate(true);
    let db = Database::new(config).await.unwrap();

    db.health_check().await.unwrap();

    let repo = SqliteEmployeeRepository::new(db.pool().clone());
    let id = repo
        .create(&test_employee("EMP001", "Joana Silva", Some("136205211224")))
        .await
        .unwrap();
    assert!(id > 0);

    db.close().await;

    // Reopen the same file: data survives and migrations are idempotent
    let db = Database::new(DatabaseConfig::new(path.to_str().unwrap()))
        .await
        .unwrap();
    let repo = SqliteEmployeeRepository::new(db.pool().clone());
    let found = repo.find_by_tag("136205211224").await.unwrap();
    assert_eq!(found.unwrap().nome, "Joana Silva");
    db.close().await;
}

#[tokio::test]
async fn test_full_record_lifecycle() {
    let db = Database::in_memory().await.unwrap();
    let employees = SqliteEmployeeRepository::new(db.pool().clone());
    let records = SqliteTimeRecordRepository::new(db.pool().clone());

    let id = employees
        .create(&test_employee("EMP002", "Carlos Souza", Some("040171205239")))
        .await
        .unwrap();

    let dia = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let morning = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 1, 10, 20, 0, 0).unwrap();

    // Created open, closed exactly once, never reopened
    let record = records.insert_clock_on(id, dia, morning).await.unwrap();
    assert!(record.is_open());

    let record = records.set_clock_off(id, dia, evening).await.unwrap();
    assert!(record.is_closed());
    assert_eq!(record.worked_duration(), Some(chrono::Duration::hours(8)));

    assert!(matches!(
        records.set_clock_off(id, dia, evening).await,
        Err(StorageError::Conflict(_))
    ));
    assert!(matches!(
        records.insert_clock_on(id, dia, morning).await,
        Err(StorageError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_tag_uniqueness_across_employees() {
    let db = Database::in_memory().await.unwrap();
    let employees = SqliteEmployeeRepository::new(db.pool().clone());

    let holder = employees
        .create(&test_employee("EMP003", "Ana Lima", Some("111222333")))
        .await
        .unwrap();
    let other = employees
        .create(&test_employee("EMP004", "Bruno Costa", None))
        .await
        .unwrap();

    // The schema rejects a second owner for the same tag
    let result = employees.attach_tag(other, "111222333").await;
    assert!(matches!(result, Err(StorageError::Conflict(_))));

    let owner = employees.find_by_tag("111222333").await.unwrap().unwrap();
    assert_eq!(owner.id, holder);
}
