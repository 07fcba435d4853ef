use biometric_core_db::models::biometric_log::BiometricLogModel;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::BiometricLogRepositoryImpl;

impl BiometricLogRepositoryImpl {
    /// Logs written for one scan event, oldest first
    pub async fn find_by_scan_event_id(
        &self,
        scan_event_id: Uuid,
    ) -> Result<Vec<BiometricLogModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, kind, title, time_stamp, details, scan_event_id
            FROM biometric_log
            WHERE scan_event_id = $1
            ORDER BY time_stamp, id
            "#,
        )
        .bind(scan_event_id);

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        rows.iter().map(BiometricLogModel::try_from_row).collect()
    }
}
