use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;

pub const SUCCESS_TITLE: &str = "Success in AttendanceBiometric after_insert";
pub const ERROR_TITLE: &str = "Error in AttendanceBiometric after_insert";
pub const NO_MATCH_TITLE: &str = "No Employee Found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "biometric_log_kind", rename_all = "PascalCase")]
pub enum BiometricLogKind {
    Success,
    Error,
    NoMatch,
}

impl std::fmt::Display for BiometricLogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiometricLogKind::Success => write!(f, "Success"),
            BiometricLogKind::Error => write!(f, "Error"),
            BiometricLogKind::NoMatch => write!(f, "NoMatch"),
        }
    }
}

/// # Documentation
/// - Outcome log of one scan event processing attempt
/// - Exactly one log per attempt, except when no toggle is enabled and nothing was created
/// - `details` holds the aggregated success notes (one per line) or the failure text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricLogModel {
    pub id: Uuid,
    pub kind: BiometricLogKind,
    pub title: HeaplessString<100>,
    pub time_stamp: DateTime<Utc>,
    pub details: String,
    pub scan_event_id: Option<Uuid>,
}

impl BiometricLogModel {
    fn new(
        kind: BiometricLogKind,
        title: &str,
        time_stamp: DateTime<Utc>,
        details: String,
        scan_event_id: Option<Uuid>,
    ) -> Self {
        let mut bounded_title = HeaplessString::new();
        for c in title.chars() {
            if bounded_title.push(c).is_err() {
                break;
            }
        }

        Self {
            id: Uuid::new_v4(),
            kind,
            title: bounded_title,
            time_stamp,
            details,
            scan_event_id,
        }
    }

    pub fn success(time_stamp: DateTime<Utc>, notes: &[String], scan_event_id: Uuid) -> Self {
        Self::new(
            BiometricLogKind::Success,
            SUCCESS_TITLE,
            time_stamp,
            notes.join("\n"),
            Some(scan_event_id),
        )
    }

    pub fn error(time_stamp: DateTime<Utc>, details: String, scan_event_id: Uuid) -> Self {
        Self::new(
            BiometricLogKind::Error,
            ERROR_TITLE,
            time_stamp,
            details,
            Some(scan_event_id),
        )
    }

    pub fn no_match(time_stamp: DateTime<Utc>, device_code: &str, scan_event_id: Uuid) -> Self {
        Self::new(
            BiometricLogKind::NoMatch,
            NO_MATCH_TITLE,
            time_stamp,
            format!("No employees found with attendance_device_id: {device_code}"),
            Some(scan_event_id),
        )
    }

    /// Lines of `details`, one per success note
    pub fn detail_lines(&self) -> impl Iterator<Item = &str> {
        self.details.lines()
    }
}

impl Identifiable for BiometricLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_log_joins_notes_by_line() {
        let notes = vec![
            "Employee Checkin created for employee a".to_string(),
            "Attendance record created for employee a".to_string(),
        ];
        let log = BiometricLogModel::success(Utc::now(), &notes, Uuid::new_v4());

        assert_eq!(log.kind, BiometricLogKind::Success);
        assert_eq!(log.title.as_str(), SUCCESS_TITLE);
        assert_eq!(log.detail_lines().count(), 2);
        assert_eq!(
            log.details,
            "Employee Checkin created for employee a\nAttendance record created for employee a"
        );
    }

    #[test]
    fn test_no_match_log_names_device_code() {
        let log = BiometricLogModel::no_match(Utc::now(), "E100", Uuid::new_v4());

        assert_eq!(log.kind, BiometricLogKind::NoMatch);
        assert_eq!(log.title.as_str(), NO_MATCH_TITLE);
        assert_eq!(log.details, "No employees found with attendance_device_id: E100");
    }
}
