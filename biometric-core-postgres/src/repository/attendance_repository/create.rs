use async_trait::async_trait;
use biometric_core_db::models::derived_record::attendance::AttendanceModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::AttendanceRepositoryImpl;

impl AttendanceRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AttendanceRepositoryImpl,
        item: AttendanceModel,
    ) -> Result<AttendanceModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO attendance (id, employee_id, attendance_date, status, scan_event_id)
            VALUES ($1, $2, $3, $4::attendance_status, $5)
            "#,
        )
        .bind(item.id)
        .bind(item.employee_id)
        .bind(item.attendance_date.as_str())
        .bind(item.status)
        .bind(item.scan_event_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, AttendanceModel> for AttendanceRepositoryImpl {
    async fn create(&self, item: AttendanceModel) -> Result<AttendanceModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
