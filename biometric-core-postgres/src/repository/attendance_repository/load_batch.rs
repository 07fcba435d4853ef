use async_trait::async_trait;
use biometric_core_db::models::derived_record::attendance::AttendanceModel;
use biometric_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AttendanceRepositoryImpl;

impl AttendanceRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &AttendanceRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AttendanceModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = sqlx::query(
            r#"
            SELECT id, employee_id, attendance_date, status, scan_event_id
            FROM attendance
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
            let item = AttendanceModel::try_from_row(&row)?;
            map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| map.remove(id)).collect())
    }

    /// Attendance rows derived from one scan event
    pub async fn find_by_scan_event_id(
        &self,
        scan_event_id: Uuid,
    ) -> Result<Vec<AttendanceModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, employee_id, attendance_date, status, scan_event_id
            FROM attendance
            WHERE scan_event_id = $1
            "#,
        )
        .bind(scan_event_id);

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        rows.iter().map(AttendanceModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadBatch<Postgres, AttendanceModel> for AttendanceRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AttendanceModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
