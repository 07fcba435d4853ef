use async_trait::async_trait;
use biometric_core_db::models::biometric_log::BiometricLogModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::BiometricLogRepositoryImpl;

impl BiometricLogRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &BiometricLogRepositoryImpl,
        item: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO biometric_log (id, kind, title, time_stamp, details, scan_event_id)
            VALUES ($1, $2::biometric_log_kind, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id)
        .bind(item.kind)
        .bind(item.title.as_str())
        .bind(item.time_stamp)
        .bind(item.details.as_str())
        .bind(item.scan_event_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, BiometricLogModel> for BiometricLogRepositoryImpl {
    async fn create(&self, item: BiometricLogModel) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use biometric_core_db::models::biometric_log::{BiometricLogKind, BiometricLogModel};
    use biometric_core_db::repository::create::Create;
    use chrono::{DurationRound, TimeDelta, Utc};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_log_for_unstored_event() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let log_repo = &ctx.repos().biometric_log_repository;

        // Postgres keeps microseconds
        let now = Utc::now().duration_trunc(TimeDelta::microseconds(1))?;
        let scan_event_id = Uuid::new_v4();
        let log = BiometricLogModel::no_match(now, "E404", scan_event_id);
        log_repo.create(log.clone()).await?;

        let found = log_repo.find_by_scan_event_id(scan_event_id).await?;
        assert_eq!(found, vec![log]);
        assert_eq!(found[0].kind, BiometricLogKind::NoMatch);

        Ok(())
    }
}
