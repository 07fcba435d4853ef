use async_trait::async_trait;
use sqlx::Database;

use crate::models::employee::EmployeeModel;

/// Identity directory: resolves a terminal device code to employees
#[async_trait]
pub trait FindByDeviceCode<DB: Database>: Send + Sync {
    /// All employees whose `attendance_device_id` equals `device_code`, in lookup order
    async fn find_by_device_code(
        &self,
        device_code: &str,
    ) -> Result<Vec<EmployeeModel>, Box<dyn std::error::Error + Send + Sync>>;
}
