use async_trait::async_trait;
use biometric_core_db::models::employee::EmployeeModel;
use biometric_core_db::repository::find_by_device_code::FindByDeviceCode;
use sqlx::{PgPool, Postgres};
use std::error::Error;
use std::sync::Arc;

use crate::repository::EmployeeRepositoryImpl;
use crate::unit_of_work;

/// Employee lookup that holds a connection only for the duration of the query
pub struct PostgresEmployeeDirectory {
    pool: Arc<PgPool>,
}

impl PostgresEmployeeDirectory {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FindByDeviceCode<Postgres> for PostgresEmployeeDirectory {
    async fn find_by_device_code(
        &self,
        device_code: &str,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let executor = unit_of_work::begin(&self.pool).await?;
        let repository = EmployeeRepositoryImpl::new(executor.clone());

        let found = repository.find_by_device_code(device_code).await;
        if let Err(e) = unit_of_work::rollback(&executor).await {
            tracing::warn!(error = %e, "release of employee lookup transaction failed");
        }
        found
    }
}
