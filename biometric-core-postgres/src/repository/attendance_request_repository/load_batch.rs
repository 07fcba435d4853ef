use async_trait::async_trait;
use biometric_core_db::models::derived_record::attendance_request::AttendanceRequestModel;
use biometric_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AttendanceRequestRepositoryImpl;

impl AttendanceRequestRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &AttendanceRequestRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AttendanceRequestModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = sqlx::query(
            r#"
            SELECT id, employee_id, from_date, to_date, reason, status, scan_event_id
            FROM attendance_request
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
            let item = AttendanceRequestModel::try_from_row(&row)?;
            map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| map.remove(id)).collect())
    }

    /// Attendance requests derived from one scan event
    pub async fn find_by_scan_event_id(
        &self,
        scan_event_id: Uuid,
    ) -> Result<Vec<AttendanceRequestModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, employee_id, from_date, to_date, reason, status, scan_event_id
            FROM attendance_request
            WHERE scan_event_id = $1
            "#,
        )
        .bind(scan_event_id);

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        rows.iter().map(AttendanceRequestModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadBatch<Postgres, AttendanceRequestModel> for AttendanceRequestRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AttendanceRequestModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
