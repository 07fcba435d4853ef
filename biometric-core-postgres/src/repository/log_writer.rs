use async_trait::async_trait;
use biometric_core_db::models::biometric_log::BiometricLogModel;
use biometric_core_db::repository::create::Create;
use biometric_core_db::repository::create_log::CreateLog;
use sqlx::{PgPool, Postgres};
use std::error::Error;
use std::sync::Arc;

use crate::repository::BiometricLogRepositoryImpl;
use crate::unit_of_work;

/// Writes error and no-match logs in their own short transaction
///
/// These logs must outlive the rollback of the record session that failed.
pub struct PostgresLogWriter {
    pool: Arc<PgPool>,
}

impl PostgresLogWriter {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreateLog<Postgres> for PostgresLogWriter {
    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        let executor = unit_of_work::begin(&self.pool).await?;
        let repository = BiometricLogRepositoryImpl::new(executor.clone());

        match repository.create(log).await {
            Ok(created) => {
                unit_of_work::commit(&executor).await?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback_err) = unit_of_work::rollback(&executor).await {
                    tracing::warn!(error = %rollback_err, "rollback of log write failed");
                }
                Err(e)
            }
        }
    }
}
