use biometric_core_db::models::settings::BiometricSettingsModel;
use postgres_unit_of_work::Executor;
use crate::utils::TryFromRow;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct SettingsRepositoryImpl {
    pub(crate) executor: Executor,
}

impl SettingsRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Insert or replace the singleton settings row
    pub async fn save_settings(
        &self,
        settings: BiometricSettingsModel,
    ) -> Result<BiometricSettingsModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO biometric_settings (id, employee_checkin, attendance, attendance_request)
            VALUES (1, $1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                employee_checkin = EXCLUDED.employee_checkin,
                attendance = EXCLUDED.attendance,
                attendance_request = EXCLUDED.attendance_request
            "#,
        )
        .bind(settings.employee_checkin)
        .bind(settings.attendance)
        .bind(settings.attendance_request);

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(settings)
    }
}

impl TryFromRow<PgRow> for BiometricSettingsModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(BiometricSettingsModel {
            employee_checkin: row.try_get("employee_checkin")?,
            attendance: row.try_get("attendance")?,
            attendance_request: row.try_get("attendance_request")?,
        })
    }
}
