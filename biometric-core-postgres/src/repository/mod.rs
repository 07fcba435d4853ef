pub mod attendance_repository;
pub mod attendance_request_repository;
pub mod biometric_log_repository;
pub mod db_init;
pub mod employee_directory;
pub mod employee_checkin_repository;
pub mod employee_repository;
pub mod log_writer;
pub mod record_store;
pub mod scan_event_repository;
pub mod settings_repository;

pub use attendance_repository::AttendanceRepositoryImpl;
pub use attendance_request_repository::AttendanceRequestRepositoryImpl;
pub use biometric_log_repository::BiometricLogRepositoryImpl;
pub use employee_directory::PostgresEmployeeDirectory;
pub use employee_checkin_repository::EmployeeCheckinRepositoryImpl;
pub use employee_repository::EmployeeRepositoryImpl;
pub use log_writer::PostgresLogWriter;
pub use record_store::{PostgresRecordSession, PostgresRecordStore};
pub use scan_event_repository::ScanEventRepositoryImpl;
pub use settings_repository::SettingsRepositoryImpl;

#[cfg(test)]
pub mod test_utils;
