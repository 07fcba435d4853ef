use async_trait::async_trait;
use sqlx::Database;

use crate::models::biometric_log::BiometricLogModel;

/// Durable log writer
///
/// Every call is committed on its own, independent of any record session,
/// so error logs survive the rollback of the records they describe.
#[async_trait]
pub trait CreateLog<DB: Database>: Send + Sync {
    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn std::error::Error + Send + Sync>>;
}
