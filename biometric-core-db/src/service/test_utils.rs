use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use heapless::String as HeaplessString;
use sqlx::Postgres;
use std::error::Error;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::models::biometric_log::BiometricLogModel;
use crate::models::derived_record::DerivedRecord;
use crate::models::employee::EmployeeModel;
use crate::models::scan_event::ScanEventModel;
use crate::repository::{CreateLog, FindByDeviceCode, RecordSession, RecordStore};
use crate::service::clock::Clock;

pub fn create_test_employee(name: &str, device_code: &str) -> EmployeeModel {
    EmployeeModel {
        id: Uuid::new_v4(),
        employee_name: HeaplessString::try_from(name).unwrap(),
        attendance_device_id: Some(HeaplessString::try_from(device_code).unwrap()),
    }
}

pub fn create_test_scan_event(device_code: Option<&str>, log_datetime: Option<&str>) -> ScanEventModel {
    ScanEventModel {
        id: Uuid::new_v4(),
        device_code: device_code.map(|code| HeaplessString::try_from(code).unwrap()),
        log_datetime: log_datetime.map(|raw| HeaplessString::try_from(raw).unwrap()),
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
struct StoreState {
    records: Vec<DerivedRecord>,
    logs: Vec<BiometricLogModel>,
    log_attempts: Vec<BiometricLogModel>,
    sessions_opened: usize,
    commits: usize,
    rollbacks: usize,
}

/// In-memory employee directory, record store and log writer
///
/// Committed records and logs from sessions land in the same state as the
/// durable log writes, so tests can assert on everything that was persisted.
#[derive(Default)]
pub struct InMemoryStore {
    employees: Vec<EmployeeModel>,
    state: Arc<Mutex<StoreState>>,
    fail_record_at: Option<usize>,
    fail_lookup: bool,
    fail_commit: bool,
    fail_log_write: bool,
}

impl InMemoryStore {
    pub fn with_employees(employees: Vec<EmployeeModel>) -> Self {
        Self {
            employees,
            ..Default::default()
        }
    }

    /// Fail the record write with this 0-based position within a session
    pub fn failing_record_at(mut self, position: usize) -> Self {
        self.fail_record_at = Some(position);
        self
    }

    pub fn failing_lookup(mut self) -> Self {
        self.fail_lookup = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Reject every durable log write
    pub fn failing_log_write(mut self) -> Self {
        self.fail_log_write = true;
        self
    }

    pub fn records(&self) -> Vec<DerivedRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn logs(&self) -> Vec<BiometricLogModel> {
        self.state.lock().unwrap().logs.clone()
    }

    /// Every durable log write, including the rejected ones
    pub fn log_attempts(&self) -> Vec<BiometricLogModel> {
        self.state.lock().unwrap().log_attempts.clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.state.lock().unwrap().sessions_opened
    }

    pub fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }

    pub fn rollbacks(&self) -> usize {
        self.state.lock().unwrap().rollbacks
    }
}

#[async_trait]
impl FindByDeviceCode<Postgres> for InMemoryStore {
    async fn find_by_device_code(
        &self,
        device_code: &str,
    ) -> Result<Vec<EmployeeModel>, Box<dyn Error + Send + Sync>> {
        if self.fail_lookup {
            return Err("employee lookup failed".into());
        }
        Ok(self
            .employees
            .iter()
            .filter(|e| e.attendance_device_id.as_deref() == Some(device_code))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CreateLog<Postgres> for InMemoryStore {
    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock().unwrap();
        state.log_attempts.push(log.clone());
        if self.fail_log_write {
            return Err("log insert failed: disk full".into());
        }
        state.logs.push(log.clone());
        Ok(log)
    }
}

#[async_trait]
impl RecordStore<Postgres> for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn RecordSession<Postgres>>, Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().sessions_opened += 1;
        Ok(Box::new(InMemorySession {
            state: self.state.clone(),
            pending: Mutex::new(Some(Pending::default())),
            fail_record_at: self.fail_record_at,
            fail_commit: self.fail_commit,
        }))
    }
}

#[derive(Default)]
struct Pending {
    records: Vec<DerivedRecord>,
    logs: Vec<BiometricLogModel>,
}

struct InMemorySession {
    state: Arc<Mutex<StoreState>>,
    pending: Mutex<Option<Pending>>,
    fail_record_at: Option<usize>,
    fail_commit: bool,
}

#[async_trait]
impl RecordSession<Postgres> for InMemorySession {
    async fn create_record(
        &self,
        record: DerivedRecord,
    ) -> Result<DerivedRecord, Box<dyn Error + Send + Sync>> {
        let mut pending = self.pending.lock().unwrap();
        let pending = pending.as_mut().ok_or("Transaction has been consumed")?;
        if self.fail_record_at == Some(pending.records.len()) {
            return Err("insert failed: connection reset".into());
        }
        pending.records.push(record.clone());
        Ok(record)
    }

    async fn create_log(
        &self,
        log: BiometricLogModel,
    ) -> Result<BiometricLogModel, Box<dyn Error + Send + Sync>> {
        let mut pending = self.pending.lock().unwrap();
        let pending = pending.as_mut().ok_or("Transaction has been consumed")?;
        pending.logs.push(log.clone());
        Ok(log)
    }

    async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let pending = self
            .pending
            .lock()
            .unwrap()
            .take()
            .ok_or("Transaction has been consumed")?;
        if self.fail_commit {
            return Err("commit failed: serialization failure".into());
        }
        let mut state = self.state.lock().unwrap();
        state.records.extend(pending.records);
        state.logs.extend(pending.logs);
        state.commits += 1;
        Ok(())
    }

    async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.pending
            .lock()
            .unwrap()
            .take()
            .ok_or("Transaction has been consumed")?;
        self.state.lock().unwrap().rollbacks += 1;
        Ok(())
    }
}
