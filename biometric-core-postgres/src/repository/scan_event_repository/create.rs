use async_trait::async_trait;
use biometric_core_db::models::scan_event::ScanEventModel;
use biometric_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ScanEventRepositoryImpl;

impl ScanEventRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ScanEventRepositoryImpl,
        item: ScanEventModel,
    ) -> Result<ScanEventModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO scan_event (id, device_code, log_datetime)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(item.id)
        .bind(item.device_code.as_deref())
        .bind(item.log_datetime.as_deref());

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, ScanEventModel> for ScanEventRepositoryImpl {
    async fn create(&self, item: ScanEventModel) -> Result<ScanEventModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_utils::create_test_scan_event;
    use crate::test_helper::setup_test_context;
    use biometric_core_db::repository::create::Create;
    use biometric_core_db::repository::load::Load;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_scan_event() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let scan_event_repo = &ctx.repos().scan_event_repository;

        let event = create_test_scan_event(Some("E100"), Some("2024-03-01 09:15:00"));
        let saved = scan_event_repo.create(event.clone()).await?;
        assert_eq!(saved, event);

        let loaded = scan_event_repo.load(event.id).await?;
        assert_eq!(loaded, Some(event));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_scan_event_without_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let scan_event_repo = &ctx.repos().scan_event_repository;

        let event = create_test_scan_event(None, None);
        scan_event_repo.create(event.clone()).await?;

        let loaded = scan_event_repo.load(event.id).await?.expect("scan event should exist");
        assert!(loaded.device_code.is_none());
        assert!(loaded.log_datetime.is_none());

        Ok(())
    }
}
