use async_trait::async_trait;
use biometric_core_db::models::derived_record::employee_checkin::EmployeeCheckinModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::EmployeeCheckinRepositoryImpl;

impl EmployeeCheckinRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &EmployeeCheckinRepositoryImpl,
        item: EmployeeCheckinModel,
    ) -> Result<EmployeeCheckinModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO employee_checkin (id, employee_id, time, log_type, scan_event_id)
            VALUES ($1, $2, $3, $4::log_type, $5)
            "#,
        )
        .bind(item.id)
        .bind(item.employee_id)
        .bind(item.time.as_str())
        .bind(item.log_type)
        .bind(item.scan_event_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, EmployeeCheckinModel> for EmployeeCheckinRepositoryImpl {
    async fn create(
        &self,
        item: EmployeeCheckinModel,
    ) -> Result<EmployeeCheckinModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
