use biometric_core_db::models::employee::EmployeeModel;
use biometric_core_db::models::scan_event::ScanEventModel;
use heapless::String as HeaplessString;
use uuid::Uuid;

pub fn create_test_employee(name: &str, device_code: Option<&str>) -> EmployeeModel {
    EmployeeModel {
        id: Uuid::new_v4(),
        employee_name: HeaplessString::try_from(name).unwrap(),
        attendance_device_id: device_code.map(|code| HeaplessString::try_from(code).unwrap()),
    }
}

pub fn create_test_scan_event(device_code: Option<&str>, log_datetime: Option<&str>) -> ScanEventModel {
    ScanEventModel {
        id: Uuid::new_v4(),
        device_code: device_code.map(|code| HeaplessString::try_from(code).unwrap()),
        log_datetime: log_datetime.map(|raw| HeaplessString::try_from(raw).unwrap()),
    }
}

/// Device code unique to one test run, so lookups never see rows from other runs
pub fn unique_device_code() -> String {
    format!("T-{}", &Uuid::new_v4().simple().to_string()[..12])
}
