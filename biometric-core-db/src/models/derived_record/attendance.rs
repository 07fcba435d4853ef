use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;
use super::common_enums::AttendanceStatus;

/// # Documentation
/// Attendance presence created for an employee from a scan event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceModel {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Terminal timestamp as received; the date part is the attendance day
    pub attendance_date: HeaplessString<50>,
    pub status: AttendanceStatus,
    pub scan_event_id: Uuid,
}

impl Identifiable for AttendanceModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
