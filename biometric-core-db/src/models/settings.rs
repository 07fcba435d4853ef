use serde::{Deserialize, Serialize};

/// # Documentation
/// Toggles deciding which derived records a scan event fans out into.
/// Loaded once per processing call and passed to the processor by value;
/// a missing settings row behaves like all toggles switched off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricSettingsModel {
    /// Create an `EmployeeCheckinModel` per matched employee
    pub employee_checkin: bool,
    /// Create an `AttendanceModel` per matched employee
    pub attendance: bool,
    /// Create an `AttendanceRequestModel` per matched employee
    pub attendance_request: bool,
}

impl BiometricSettingsModel {
    pub fn all_enabled() -> Self {
        Self {
            employee_checkin: true,
            attendance: true,
            attendance_request: true,
        }
    }
}
