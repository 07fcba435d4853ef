use biometric_core_db::models::derived_record::attendance_request::AttendanceRequestModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct AttendanceRequestRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AttendanceRequestRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AttendanceRequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AttendanceRequestModel {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            from_date: get_heapless_string(row, "from_date")?,
            to_date: get_heapless_string(row, "to_date")?,
            reason: get_heapless_string(row, "reason")?,
            status: row.try_get("status")?,
            scan_event_id: row.try_get("scan_event_id")?,
        })
    }
}
