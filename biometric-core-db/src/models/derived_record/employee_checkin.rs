use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;
use super::common_enums::LogType;

/// # Documentation
/// Check-in created for an employee from a scan event.
/// `time` keeps the terminal timestamp exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCheckinModel {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub time: HeaplessString<50>,
    pub log_type: LogType,
    /// Scan event this check-in was derived from
    pub scan_event_id: Uuid,
}

impl Identifiable for EmployeeCheckinModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
