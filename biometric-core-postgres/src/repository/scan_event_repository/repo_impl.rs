use async_trait::async_trait;
use biometric_core_db::{
    models::scan_event::ScanEventModel,
    repository::{load::Load, load_batch::LoadBatch},
};
use postgres_unit_of_work::Executor;
use crate::utils::{get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Postgres, Row};
use std::error::Error;
use uuid::Uuid;

pub struct ScanEventRepositoryImpl {
    pub(crate) executor: Executor,
}

impl ScanEventRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ScanEventModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ScanEventModel {
            id: row.try_get("id")?,
            device_code: get_optional_heapless_string(row, "device_code")?,
            log_datetime: get_optional_heapless_string(row, "log_datetime")?,
        })
    }
}

#[async_trait]
impl Load<Postgres, ScanEventModel> for ScanEventRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<ScanEventModel>, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}
