use async_trait::async_trait;
use biometric_core_db::models::employee::EmployeeModel;
use biometric_core_db::repository::find_by_device_code::FindByDeviceCode;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::EmployeeRepositoryImpl;

impl EmployeeRepositoryImpl {
    pub(super) async fn find_by_device_code_impl(
        repo: &EmployeeRepositoryImpl,
        device_code: &str,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, employee_name, attendance_device_id
            FROM employee
            WHERE attendance_device_id = $1
            ORDER BY employee_name, id
            "#,
        )
        .bind(device_code);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut employees = Vec::with_capacity(rows.len());
        for row in rows {
            employees.push(EmployeeModel::try_from_row(&row)?);
        }
        Ok(employees)
    }
}

#[async_trait]
impl FindByDeviceCode<Postgres> for EmployeeRepositoryImpl {
    async fn find_by_device_code(
        &self,
        device_code: &str,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_device_code_impl(self, device_code).await
    }
}
