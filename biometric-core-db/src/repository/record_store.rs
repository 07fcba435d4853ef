use async_trait::async_trait;
use sqlx::Database;

use crate::models::biometric_log::BiometricLogModel;
use crate::models::derived_record::DerivedRecord;

/// Record store for derived records
///
/// All writes of one scan event go through a single `RecordSession`,
/// which is either committed or rolled back as a whole.
#[async_trait]
pub trait RecordStore<DB: Database>: Send + Sync {
    /// Open a new unit of work
    async fn begin(&self) -> Result<Box<dyn RecordSession<DB>>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Unit of work over derived records and the success log of one scan event
///
/// After `commit` or `rollback` the session is consumed and every further
/// call fails.
#[async_trait]
pub trait RecordSession<DB: Database>: Send + Sync {
    async fn create_record(
        &self,
        record: DerivedRecord,
    ) -> Result<DerivedRecord, Box<dyn std::error::Error + Send + Sync>>;

    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn std::error::Error + Send + Sync>>;

    async fn commit(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn rollback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
