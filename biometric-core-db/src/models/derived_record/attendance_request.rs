use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;
use super::common_enums::AttendanceRequestStatus;

/// Reason recorded on requests opened by the processor
pub const AUTO_CREATED_REASON: &str = "Auto-created by Attendance Biometric";

/// # Documentation
/// Attendance request opened for an employee from a scan event.
/// `from_date` and `to_date` both carry the terminal timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRequestModel {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub from_date: HeaplessString<50>,
    pub to_date: HeaplessString<50>,
    pub reason: HeaplessString<100>,
    pub status: AttendanceRequestStatus,
    pub scan_event_id: Uuid,
}

impl Identifiable for AttendanceRequestModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
