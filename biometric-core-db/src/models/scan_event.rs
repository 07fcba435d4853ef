use biometric_core_api::{BiometricError, BiometricResult, ScanEventFields};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// ScanEvent is one raw reading emitted by a biometric terminal.
/// It is written once by the ingesting side and never modified afterwards.
/// Both fields are optional at the storage level; presence is enforced by
/// the processor before any derived record is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEventModel {
    pub id: Uuid,

    /// Terminal identifier, matched against `EmployeeModel::attendance_device_id`
    pub device_code: Option<HeaplessString<50>>,

    /// Raw terminal timestamp, expected as `YYYY-MM-DD HH:MM:SS`
    pub log_datetime: Option<HeaplessString<50>>,
}

impl ScanEventModel {
    /// Required-field view used for validation
    pub fn fields(&self) -> ScanEventFields {
        ScanEventFields::new(
            self.device_code.as_deref(),
            self.log_datetime.as_deref(),
        )
    }

    /// Device code and raw timestamp, or `MissingField` for the first one absent or empty
    pub fn required_fields(&self) -> BiometricResult<(&HeaplessString<50>, &HeaplessString<50>)> {
        self.fields().check()?;
        match (&self.device_code, &self.log_datetime) {
            (Some(device_code), Some(log_datetime)) => Ok((device_code, log_datetime)),
            (None, _) => Err(BiometricError::MissingField("device_code".to_string())),
            (_, None) => Err(BiometricError::MissingField("log_datetime".to_string())),
        }
    }
}

impl Identifiable for ScanEventModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
