use biometric_core_db::models::derived_record::attendance::AttendanceModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct AttendanceRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AttendanceRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AttendanceModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AttendanceModel {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            attendance_date: get_heapless_string(row, "attendance_date")?,
            status: row.try_get("status")?,
            scan_event_id: row.try_get("scan_event_id")?,
        })
    }
}
