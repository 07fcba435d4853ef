use async_trait::async_trait;
use biometric_core_db::models::biometric_log::BiometricLogModel;
use biometric_core_db::models::derived_record::DerivedRecord;
use biometric_core_db::repository::create::Create;
use biometric_core_db::repository::record_store::{RecordSession, RecordStore};
use sqlx::{PgPool, Postgres};
use std::error::Error;
use std::sync::Arc;

use postgres_unit_of_work::Executor;

use crate::repository::{
    AttendanceRepositoryImpl, AttendanceRequestRepositoryImpl, BiometricLogRepositoryImpl,
    EmployeeCheckinRepositoryImpl,
};
use crate::unit_of_work;

/// Opens one transaction per scan event for derived records and the success log
pub struct PostgresRecordStore {
    pool: Arc<PgPool>,
}

impl PostgresRecordStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Postgres> for PostgresRecordStore {
    async fn begin(&self) -> Result<Box<dyn RecordSession<Postgres>>, Box<dyn Error + Send + Sync>> {
        let executor = unit_of_work::begin(&self.pool).await?;
        Ok(Box::new(PostgresRecordSession::new(executor)))
    }
}

pub struct PostgresRecordSession {
    executor: Executor,
    employee_checkin_repository: EmployeeCheckinRepositoryImpl,
    attendance_repository: AttendanceRepositoryImpl,
    attendance_request_repository: AttendanceRequestRepositoryImpl,
    biometric_log_repository: BiometricLogRepositoryImpl,
}

impl PostgresRecordSession {
    pub fn new(executor: Executor) -> Self {
        Self {
            employee_checkin_repository: EmployeeCheckinRepositoryImpl::new(executor.clone()),
            attendance_repository: AttendanceRepositoryImpl::new(executor.clone()),
            attendance_request_repository: AttendanceRequestRepositoryImpl::new(executor.clone()),
            biometric_log_repository: BiometricLogRepositoryImpl::new(executor.clone()),
            executor,
        }
    }
}

#[async_trait]
impl RecordSession<Postgres> for PostgresRecordSession {
    async fn create_record(
        &self,
        record: DerivedRecord,
    ) -> Result<DerivedRecord, Box<dyn Error + Send + Sync>> {
        let created = match record {
            DerivedRecord::Checkin(item) => {
                DerivedRecord::Checkin(self.employee_checkin_repository.create(item).await?)
            }
            DerivedRecord::Attendance(item) => {
                DerivedRecord::Attendance(self.attendance_repository.create(item).await?)
            }
            DerivedRecord::AttendanceRequest(item) => {
                DerivedRecord::AttendanceRequest(self.attendance_request_repository.create(item).await?)
            }
        };
        Ok(created)
    }

    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        self.biometric_log_repository.create(log).await
    }

    async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        unit_of_work::commit(&self.executor).await
    }

    async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        unit_of_work::rollback(&self.executor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_shared_repos;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_session_is_consumed_after_commit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_shared_repos().await?;
        let executor = unit_of_work::begin(repos.pool()).await?;
        let session = PostgresRecordSession::new(executor.clone());

        session.commit().await?;

        assert!(unit_of_work::is_consumed(&executor).await);
        let err = session.rollback().await.unwrap_err();
        assert_eq!(err.to_string(), "Transaction has been consumed");

        Ok(())
    }
}
