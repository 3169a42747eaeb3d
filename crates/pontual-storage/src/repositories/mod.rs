pub mod employee;
pub mod time_record;

pub use employee::{EmployeeRepository, SqliteEmployeeRepository};
pub use time_record::{SqliteTimeRecordRepository, TimeRecordRepository};
