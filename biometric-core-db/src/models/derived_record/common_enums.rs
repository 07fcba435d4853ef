use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of a check-in, derived from the hour of the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "log_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum LogType {
    In,
    Out,
}

impl LogType {
    /// Scans before noon are entries, everything from 12:00 on is an exit
    pub fn from_log_datetime(logged_at: &chrono::NaiveDateTime) -> Self {
        if biometric_core_api::is_morning(logged_at) {
            LogType::In
        } else {
            LogType::Out
        }
    }
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogType::In => write!(f, "IN"),
            LogType::Out => write!(f, "OUT"),
        }
    }
}

impl FromStr for LogType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN" => Ok(LogType::In),
            "OUT" => Ok(LogType::Out),
            _ => Err(()),
        }
    }
}

/// Written as `Present`; the other states are set by HR on stored rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_status", rename_all = "PascalCase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    OnLeave,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::HalfDay => write!(f, "HalfDay"),
            AttendanceStatus::OnLeave => write!(f, "OnLeave"),
        }
    }
}

/// Requests are opened as `Open` and moved on by an approver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_request_status", rename_all = "PascalCase")]
pub enum AttendanceRequestStatus {
    Open,
    Approved,
    Rejected,
    Cancelled,
}

impl std::fmt::Display for AttendanceRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceRequestStatus::Open => write!(f, "Open"),
            AttendanceRequestStatus::Approved => write!(f, "Approved"),
            AttendanceRequestStatus::Rejected => write!(f, "Rejected"),
            AttendanceRequestStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}
