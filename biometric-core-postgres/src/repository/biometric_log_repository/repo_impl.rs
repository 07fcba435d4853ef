use biometric_core_db::models::biometric_log::BiometricLogModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct BiometricLogRepositoryImpl {
    pub(crate) executor: Executor,
}

impl BiometricLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for BiometricLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BiometricLogModel {
            id: row.try_get("id")?,
            kind: row.try_get("kind")?,
            title: get_heapless_string(row, "title")?,
            time_stamp: row.try_get("time_stamp")?,
            details: row.try_get("details")?,
            scan_event_id: row.try_get("scan_event_id")?,
        })
    }
}
