use async_trait::async_trait;
use biometric_core_db::models::derived_record::employee_checkin::EmployeeCheckinModel;
use biometric_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::EmployeeCheckinRepositoryImpl;

impl EmployeeCheckinRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &EmployeeCheckinRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<EmployeeCheckinModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = sqlx::query(
            r#"
            SELECT id, employee_id, time, log_type, scan_event_id
            FROM employee_checkin
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = EmployeeCheckinModel::try_from_row(&row)?;
            map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| map.remove(id)).collect())
    }

    /// Check-ins derived from one scan event
    pub async fn find_by_scan_event_id(
        &self,
        scan_event_id: Uuid,
    ) -> Result<Vec<EmployeeCheckinModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, employee_id, time, log_type, scan_event_id
            FROM employee_checkin
            WHERE scan_event_id = $1
            "#,
        )
        .bind(scan_event_id);

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        rows.iter().map(EmployeeCheckinModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadBatch<Postgres, EmployeeCheckinModel> for EmployeeCheckinRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<EmployeeCheckinModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
