pub mod common_enums;
pub mod employee_checkin;
pub mod attendance;
pub mod attendance_request;

pub use common_enums::*;
pub use employee_checkin::*;
pub use attendance::*;
pub use attendance_request::*;

use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;

const _: () = assert!(AUTO_CREATED_REASON.len() <= 100);

/// Record produced from a scan event for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DerivedRecord {
    Checkin(EmployeeCheckinModel),
    Attendance(AttendanceModel),
    AttendanceRequest(AttendanceRequestModel),
}

impl DerivedRecord {
    pub fn checkin(
        employee_id: Uuid,
        log_datetime: &HeaplessString<50>,
        log_type: LogType,
        scan_event_id: Uuid,
    ) -> Self {
        DerivedRecord::Checkin(EmployeeCheckinModel {
            id: Uuid::new_v4(),
            employee_id,
            time: log_datetime.clone(),
            log_type,
            scan_event_id,
        })
    }

    pub fn attendance(
        employee_id: Uuid,
        log_datetime: &HeaplessString<50>,
        scan_event_id: Uuid,
    ) -> Self {
        DerivedRecord::Attendance(AttendanceModel {
            id: Uuid::new_v4(),
            employee_id,
            attendance_date: log_datetime.clone(),
            status: AttendanceStatus::Present,
            scan_event_id,
        })
    }

    pub fn attendance_request(
        employee_id: Uuid,
        log_datetime: &HeaplessString<50>,
        scan_event_id: Uuid,
    ) -> Self {
        DerivedRecord::AttendanceRequest(AttendanceRequestModel {
            id: Uuid::new_v4(),
            employee_id,
            from_date: log_datetime.clone(),
            to_date: log_datetime.clone(),
            reason: HeaplessString::try_from(AUTO_CREATED_REASON).unwrap_or_default(),
            status: AttendanceRequestStatus::Open,
            scan_event_id,
        })
    }

    pub fn employee_id(&self) -> Uuid {
        match self {
            DerivedRecord::Checkin(record) => record.employee_id,
            DerivedRecord::Attendance(record) => record.employee_id,
            DerivedRecord::AttendanceRequest(record) => record.employee_id,
        }
    }

    pub fn scan_event_id(&self) -> Uuid {
        match self {
            DerivedRecord::Checkin(record) => record.scan_event_id,
            DerivedRecord::Attendance(record) => record.scan_event_id,
            DerivedRecord::AttendanceRequest(record) => record.scan_event_id,
        }
    }

    /// One line of the aggregated success log
    pub fn success_note(&self) -> String {
        let employee_id = self.employee_id();
        match self {
            DerivedRecord::Checkin(_) => {
                format!("Employee Checkin created for employee {employee_id}")
            }
            DerivedRecord::Attendance(_) => {
                format!("Attendance record created for employee {employee_id}")
            }
            DerivedRecord::AttendanceRequest(_) => {
                format!("Attendance Request created for employee {employee_id}")
            }
        }
    }
}

impl Identifiable for DerivedRecord {
    fn get_id(&self) -> Uuid {
        match self {
            DerivedRecord::Checkin(record) => record.get_id(),
            DerivedRecord::Attendance(record) => record.get_id(),
            DerivedRecord::AttendanceRequest(record) => record.get_id(),
        }
    }
}
