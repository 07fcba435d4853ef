use biometric_core_db::models::employee::EmployeeModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct EmployeeRepositoryImpl {
    pub(crate) executor: Executor,
}

impl EmployeeRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for EmployeeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(EmployeeModel {
            id: row.try_get("id")?,
            employee_name: get_heapless_string(row, "employee_name")?,
            attendance_device_id: get_optional_heapless_string(row, "attendance_device_id")?,
        })
    }
}
