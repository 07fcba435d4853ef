use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Employee resolved from a terminal device code.
/// Several employees may share the same `attendance_device_id`; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: Uuid,
    pub employee_name: HeaplessString<100>,
    pub attendance_device_id: Option<HeaplessString<50>>,
}

impl Identifiable for EmployeeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
