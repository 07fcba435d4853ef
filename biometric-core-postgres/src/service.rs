use biometric_core_api::{BiometricError, BiometricResult};
use biometric_core_db::models::scan_event::ScanEventModel;
use biometric_core_db::models::settings::BiometricSettingsModel;
use biometric_core_db::repository::create::Create;
use biometric_core_db::repository::load::Load;
use biometric_core_db::repository::load_settings::LoadSettings;
use biometric_core_db::service::{Clock, ProcessOutcome, ScanEventProcessor, SystemClock};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::postgres_repositories::{BiometricRepositories, PostgresRepositories};

/// After-insert entry point for stored biometric scans
///
/// `ingest` commits the scan event before any derived record is attempted,
/// so a failed fan-out never loses the raw reading.
pub struct AttendanceBiometricService {
    repositories: PostgresRepositories,
    clock: Arc<dyn Clock>,
}

impl AttendanceBiometricService {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    /// Connect using environment-derived settings
    pub async fn from_config(config: &DatabaseConfig) -> BiometricResult<Self> {
        let pool = config.connect().await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn with_clock(pool: Arc<PgPool>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repositories: PostgresRepositories::new(pool),
            clock,
        }
    }

    /// Store a new scan event, then process it
    pub async fn ingest(&self, event: ScanEventModel) -> BiometricResult<ProcessOutcome> {
        let repos = self.repositories.create_biometric_repositories().await?;
        let event = match repos.scan_event_repository.create(event).await {
            Ok(event) => event,
            Err(e) => {
                rollback_quietly(&repos).await;
                return Err(e.into());
            }
        };
        repos.commit().await?;
        debug!(scan_event_id = %event.id, "Scan event stored");

        self.process(&event).await
    }

    /// Re-run processing for a scan event that is already stored
    pub async fn process_existing(&self, scan_event_id: Uuid) -> BiometricResult<ProcessOutcome> {
        let repos = self.repositories.create_biometric_repositories().await?;
        let loaded = repos.scan_event_repository.load(scan_event_id).await;
        rollback_quietly(&repos).await;

        let event = loaded?
            .ok_or_else(|| BiometricError::NotFound(format!("scan event {scan_event_id}")))?;

        self.process(&event).await
    }

    /// Each step below holds at most one pooled connection at a time
    async fn process(&self, event: &ScanEventModel) -> BiometricResult<ProcessOutcome> {
        let processor = ScanEventProcessor::<Postgres>::new(
            self.repositories.employee_directory(),
            self.repositories.record_store(),
            self.repositories.log_writer(),
            self.clock.clone(),
        );

        let settings = match self.load_settings().await {
            Ok(settings) => settings,
            Err(err) => return Err(processor.record_failure(event.id, err).await),
        };

        processor.process(event, &settings).await
    }

    async fn load_settings(&self) -> BiometricResult<BiometricSettingsModel> {
        let repos = self.repositories.create_biometric_repositories().await?;
        let settings = repos.settings_repository.load_settings().await;
        rollback_quietly(&repos).await;
        Ok(settings?)
    }
}

/// Release a read-only transaction
async fn rollback_quietly(repos: &BiometricRepositories) {
    if let Err(e) = repos.rollback().await {
        error!(error = %e, "Failed to release read transaction");
    }
}
