use biometric_core_api::{parse_log_datetime, BiometricError, BiometricResult};
use heapless::String as HeaplessString;
use sqlx::Database;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::models::biometric_log::BiometricLogModel;
use crate::models::derived_record::{DerivedRecord, LogType};
use crate::models::employee::EmployeeModel;
use crate::models::scan_event::ScanEventModel;
use crate::models::settings::BiometricSettingsModel;
use crate::repository::{CreateLog, FindByDeviceCode, RecordSession, RecordStore};
use crate::service::clock::Clock;

/// Result of processing one scan event that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// No employee carries the device code; a `NoMatch` log was written
    NoMatch(BiometricLogModel),
    /// Employees matched but every toggle is off; nothing was written
    NoAction,
    /// Records were created and committed together with the success log
    Processed {
        records: Vec<DerivedRecord>,
        log: BiometricLogModel,
    },
}

/// Fans a scan event out into derived HR records
///
/// Flow:
/// 1. Validate device code (reported without a log) and timestamp
/// 2. Resolve employees by device code, logging `NoMatch` when none exist
/// 3. Parse the timestamp and classify IN/OUT
/// 4. Create the enabled records for every employee in one record session
/// 5. Write the aggregated success log and commit
///
/// Any failure after step 1 rolls back the session, writes one error log
/// through the durable log writer and is returned to the caller.
pub struct ScanEventProcessor<DB: Database> {
    employee_repository: Arc<dyn FindByDeviceCode<DB>>,
    record_store: Arc<dyn RecordStore<DB>>,
    log_repository: Arc<dyn CreateLog<DB>>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> ScanEventProcessor<DB> {
    pub fn new(
        employee_repository: Arc<dyn FindByDeviceCode<DB>>,
        record_store: Arc<dyn RecordStore<DB>>,
        log_repository: Arc<dyn CreateLog<DB>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employee_repository,
            record_store,
            log_repository,
            clock,
        }
    }

    pub async fn process(
        &self,
        event: &ScanEventModel,
        settings: &BiometricSettingsModel,
    ) -> BiometricResult<ProcessOutcome> {
        debug!(scan_event_id = %event.id, ?settings, "Processing scan event");

        let (device_code, log_datetime) = match event.required_fields() {
            Ok(fields) => fields,
            Err(err) if err.missing_field() == Some("device_code") => {
                error!(scan_event_id = %event.id, "Device code is missing from scan event");
                return Err(err);
            }
            Err(err) => return Err(self.record_failure(event.id, err).await),
        };

        let employees = match self
            .employee_repository
            .find_by_device_code(device_code)
            .await
        {
            Ok(employees) => employees,
            Err(e) => return Err(self.record_failure(event.id, e.into()).await),
        };

        if employees.is_empty() {
            warn!(
                scan_event_id = %event.id,
                device_code = %device_code,
                "No employees found for device code"
            );
            let log = BiometricLogModel::no_match(self.clock.now(), device_code, event.id);
            return match self.log_repository.create_log(log).await {
                Ok(log) => Ok(ProcessOutcome::NoMatch(log)),
                Err(e) => Err(self.record_failure(event.id, e.into()).await),
            };
        }

        let logged_at = match parse_log_datetime(log_datetime) {
            Ok(logged_at) => logged_at,
            Err(err) => return Err(self.record_failure(event.id, err).await),
        };
        let log_type = LogType::from_log_datetime(&logged_at);

        let planned = plan_records(&employees, settings, log_datetime, log_type, event.id);
        if planned.is_empty() {
            info!(
                scan_event_id = %event.id,
                employee_count = employees.len(),
                "All derived records are disabled, nothing to create"
            );
            return Ok(ProcessOutcome::NoAction);
        }

        let session = match self.record_store.begin().await {
            Ok(session) => session,
            Err(e) => return Err(self.record_failure(event.id, e.into()).await),
        };

        let (records, log) = match self.write_records(session.as_ref(), planned, event.id).await {
            Ok(written) => written,
            Err(err) => {
                if let Err(rollback_err) = session.rollback().await {
                    error!(
                        scan_event_id = %event.id,
                        error = %rollback_err,
                        "Failed to roll back derived records"
                    );
                }
                return Err(self.record_failure(event.id, err).await);
            }
        };

        if let Err(e) = session.commit().await {
            return Err(self.record_failure(event.id, e.into()).await);
        }

        info!(
            scan_event_id = %event.id,
            device_code = %device_code,
            log_type = %log_type,
            record_count = records.len(),
            "Scan event processed"
        );

        Ok(ProcessOutcome::Processed { records, log })
    }

    async fn write_records(
        &self,
        session: &dyn RecordSession<DB>,
        planned: Vec<DerivedRecord>,
        scan_event_id: Uuid,
    ) -> BiometricResult<(Vec<DerivedRecord>, BiometricLogModel)> {
        let mut records = Vec::with_capacity(planned.len());
        let mut notes = Vec::with_capacity(planned.len());

        for record in planned {
            let saved = session.create_record(record).await?;
            debug!(
                scan_event_id = %scan_event_id,
                employee_id = %saved.employee_id(),
                "Derived record created"
            );
            notes.push(saved.success_note());
            records.push(saved);
        }

        let log = BiometricLogModel::success(self.clock.now(), &notes, scan_event_id);
        let log = session.create_log(log).await?;

        Ok((records, log))
    }

    /// Write the error log for a failed attempt and hand the error back
    pub async fn record_failure(&self, scan_event_id: Uuid, err: BiometricError) -> BiometricError {
        error!(scan_event_id = %scan_event_id, error = %err, "Scan event processing failed");

        let log = BiometricLogModel::error(self.clock.now(), err.to_string(), scan_event_id);
        if let Err(log_err) = self.log_repository.create_log(log).await {
            error!(
                scan_event_id = %scan_event_id,
                error = %log_err,
                "Failed to write error log"
            );
        }
        err
    }
}

/// Records to create, per employee in lookup order: check-in, attendance, attendance request
fn plan_records(
    employees: &[EmployeeModel],
    settings: &BiometricSettingsModel,
    log_datetime: &HeaplessString<50>,
    log_type: LogType,
    scan_event_id: Uuid,
) -> Vec<DerivedRecord> {
    let mut planned = Vec::new();
    for employee in employees {
        if settings.employee_checkin {
            planned.push(DerivedRecord::checkin(
                employee.id,
                log_datetime,
                log_type,
                scan_event_id,
            ));
        }
        if settings.attendance {
            planned.push(DerivedRecord::attendance(employee.id, log_datetime, scan_event_id));
        }
        if settings.attendance_request {
            planned.push(DerivedRecord::attendance_request(
                employee.id,
                log_datetime,
                scan_event_id,
            ));
        }
    }
    planned
}
