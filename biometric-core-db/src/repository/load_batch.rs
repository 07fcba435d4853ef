use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading multiple entities by their IDs
///
/// Results are returned in the same order as the requested ids,
/// with `None` for every id that does not exist.
#[async_trait]
pub trait LoadBatch<DB: Database, T: Identifiable>: Send + Sync {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<T>>, Box<dyn std::error::Error + Send + Sync>>;
}
