use async_trait::async_trait;
use biometric_core_db::models::scan_event::ScanEventModel;
use biometric_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ScanEventRepositoryImpl;

impl ScanEventRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ScanEventRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ScanEventModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = sqlx::query(
            r#"SELECT id, device_code, log_datetime FROM scan_event WHERE id = ANY($1)"#,
        )
        .bind(ids);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = ScanEventModel::try_from_row(&row)?;
            map.insert(item.id, item);
        }

        // Same order as the requested ids
        Ok(ids.iter().map(|id| map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, ScanEventModel> for ScanEventRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ScanEventModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
