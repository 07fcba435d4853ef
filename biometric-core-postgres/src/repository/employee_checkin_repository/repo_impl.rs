use biometric_core_db::models::derived_record::employee_checkin::EmployeeCheckinModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct EmployeeCheckinRepositoryImpl {
    pub(crate) executor: Executor,
}

impl EmployeeCheckinRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for EmployeeCheckinModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(EmployeeCheckinModel {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            time: get_heapless_string(row, "time")?,
            log_type: row.try_get("log_type")?,
            scan_event_id: row.try_get("scan_event_id")?,
        })
    }
}
