use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating a single entity
/// 
/// The write joins whatever transaction the implementation is bound to;
/// it is only durable once that transaction commits.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Save one item
    /// 
    /// # Returns
    /// * `Ok(T)` - The created entity
    /// * `Err` - An error if the insert failed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
