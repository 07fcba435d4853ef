use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<Postgres, ScanEventModel> for ScanEventRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<Option<ScanEventModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    /// 
    /// # Returns
    /// * `Ok(Some(T))` - The loaded entity
    /// * `Ok(None)` - No entity with this id exists
    /// * `Err` - An error if the query could not be executed
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
