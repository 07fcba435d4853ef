use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;

use postgres_unit_of_work::Executor;

use crate::repository::{
    AttendanceRepositoryImpl, AttendanceRequestRepositoryImpl, BiometricLogRepositoryImpl,
    EmployeeCheckinRepositoryImpl, EmployeeRepositoryImpl, PostgresEmployeeDirectory,
    PostgresLogWriter, PostgresRecordStore, ScanEventRepositoryImpl, SettingsRepositoryImpl,
};
use crate::unit_of_work;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create all repositories sharing a single transaction
    pub async fn create_biometric_repositories(&self) -> Result<BiometricRepositories, sqlx::Error> {
        let executor = unit_of_work::begin(&self.pool).await?;

        Ok(BiometricRepositories {
            scan_event_repository: Arc::new(ScanEventRepositoryImpl::new(executor.clone())),
            employee_repository: Arc::new(EmployeeRepositoryImpl::new(executor.clone())),
            settings_repository: Arc::new(SettingsRepositoryImpl::new(executor.clone())),
            employee_checkin_repository: Arc::new(EmployeeCheckinRepositoryImpl::new(executor.clone())),
            attendance_repository: Arc::new(AttendanceRepositoryImpl::new(executor.clone())),
            attendance_request_repository: Arc::new(AttendanceRequestRepositoryImpl::new(executor.clone())),
            biometric_log_repository: Arc::new(BiometricLogRepositoryImpl::new(executor.clone())),
            executor,
        })
    }

    /// Employee lookup running each query in its own short transaction
    pub fn employee_directory(&self) -> Arc<PostgresEmployeeDirectory> {
        Arc::new(PostgresEmployeeDirectory::new(self.pool.clone()))
    }

    /// Record store opening a fresh transaction per scan event
    pub fn record_store(&self) -> Arc<PostgresRecordStore> {
        Arc::new(PostgresRecordStore::new(self.pool.clone()))
    }

    /// Log writer committing each log on its own
    pub fn log_writer(&self) -> Arc<PostgresLogWriter> {
        Arc::new(PostgresLogWriter::new(self.pool.clone()))
    }
}

pub struct BiometricRepositories {
    pub scan_event_repository: Arc<ScanEventRepositoryImpl>,
    pub employee_repository: Arc<EmployeeRepositoryImpl>,
    pub settings_repository: Arc<SettingsRepositoryImpl>,
    pub employee_checkin_repository: Arc<EmployeeCheckinRepositoryImpl>,
    pub attendance_repository: Arc<AttendanceRepositoryImpl>,
    pub attendance_request_repository: Arc<AttendanceRequestRepositoryImpl>,
    pub biometric_log_repository: Arc<BiometricLogRepositoryImpl>,
    executor: Executor,
}

impl BiometricRepositories {
    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        unit_of_work::commit(&self.executor).await
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        unit_of_work::rollback(&self.executor).await
    }
}
