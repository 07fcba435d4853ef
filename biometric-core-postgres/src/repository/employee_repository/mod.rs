pub mod repo_impl;
pub mod create;
pub mod find_by_device_code;

pub use repo_impl::EmployeeRepositoryImpl;
