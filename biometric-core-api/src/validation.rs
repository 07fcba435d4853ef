use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{BiometricError, BiometricResult};

/// Format of the timestamp emitted by biometric terminals
pub const LOG_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour from which a scan counts as an exit rather than an entry
pub const OUT_FROM_HOUR: u32 = 12;

/// Required fields of a raw scan event, checked before any lookup is made
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScanEventFields {
    #[validate(required, length(min = 1))]
    pub device_code: Option<String>,

    #[validate(required, length(min = 1))]
    pub log_datetime: Option<String>,
}

impl ScanEventFields {
    pub fn new(device_code: Option<&str>, log_datetime: Option<&str>) -> Self {
        Self {
            device_code: device_code.map(str::to_string),
            log_datetime: log_datetime.map(str::to_string),
        }
    }

    /// Validate both fields, reporting the device code first
    pub fn check(&self) -> BiometricResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        if field_errors.contains_key("device_code") {
            return Err(BiometricError::MissingField("device_code".to_string()));
        }
        if field_errors.contains_key("log_datetime") {
            return Err(BiometricError::MissingField("log_datetime".to_string()));
        }
        Ok(())
    }
}

/// Parse a raw terminal timestamp in `YYYY-MM-DD HH:MM:SS` format
pub fn parse_log_datetime(raw: &str) -> BiometricResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, LOG_DATETIME_FORMAT).map_err(|e| {
        BiometricError::TimestampParse {
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })
}

/// True when the scan happened before noon
pub fn is_morning(logged_at: &NaiveDateTime) -> bool {
    logged_at.hour() < OUT_FROM_HOUR
}
