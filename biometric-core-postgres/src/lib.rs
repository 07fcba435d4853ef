pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod unit_of_work;
pub mod utils;

pub use config::DatabaseConfig;
pub use postgres_repositories::{BiometricRepositories, PostgresRepositories};
pub use service::AttendanceBiometricService;

#[cfg(test)]
pub mod test_helper;
