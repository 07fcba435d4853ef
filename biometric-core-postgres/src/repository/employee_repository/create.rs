use async_trait::async_trait;
use biometric_core_db::models::employee::EmployeeModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::EmployeeRepositoryImpl;

impl EmployeeRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &EmployeeRepositoryImpl,
        item: EmployeeModel,
    ) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO employee (id, employee_name, attendance_device_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(item.id)
        .bind(item.employee_name.as_str())
        .bind(item.attendance_device_id.as_deref());

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, EmployeeModel> for EmployeeRepositoryImpl {
    async fn create(&self, item: EmployeeModel) -> Result<EmployeeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
