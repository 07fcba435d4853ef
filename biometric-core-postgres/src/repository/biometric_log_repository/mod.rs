pub mod repo_impl;
pub mod create;
pub mod find_by_scan_event_id;

pub use repo_impl::BiometricLogRepositoryImpl;
