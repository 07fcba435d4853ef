use async_trait::async_trait;
use biometric_core_db::models::settings::BiometricSettingsModel;
use biometric_core_db::repository::load_settings::LoadSettings;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::SettingsRepositoryImpl;

#[async_trait]
impl LoadSettings<Postgres> for SettingsRepositoryImpl {
    async fn load_settings(&self) -> Result<BiometricSettingsModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT employee_checkin, attendance, attendance_request
            FROM biometric_settings
            WHERE id = 1
            "#,
        );

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_optional(&mut **transaction).await?
        };

        match row {
            Some(row) => BiometricSettingsModel::try_from_row(&row),
            None => Ok(BiometricSettingsModel::default()),
        }
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use crate::test_helper::setup_test_context;
    use biometric_core_db::models::settings::BiometricSettingsModel;
    use biometric_core_db::repository::load_settings::LoadSettings;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_save_and_load_settings() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let settings_repo = &ctx.repos().settings_repository;

        let settings = BiometricSettingsModel {
            employee_checkin: true,
            attendance: false,
            attendance_request: true,
        };
        settings_repo.save_settings(settings).await?;
        assert_eq!(settings_repo.load_settings().await?, settings);

        settings_repo.save_settings(BiometricSettingsModel::all_enabled()).await?;
        assert_eq!(
            settings_repo.load_settings().await?,
            BiometricSettingsModel::all_enabled()
        );

        Ok(())
    }
}
