use async_trait::async_trait;
use sqlx::Database;

use crate::models::settings::BiometricSettingsModel;

/// Configuration store for the singleton biometric settings
#[async_trait]
pub trait LoadSettings<DB: Database>: Send + Sync {
    /// Current settings; implementations return the default (all off) when none are stored
    async fn load_settings(
        &self,
    ) -> Result<BiometricSettingsModel, Box<dyn std::error::Error + Send + Sync>>;
}
