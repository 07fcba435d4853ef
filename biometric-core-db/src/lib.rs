pub mod models;
pub mod repository;
pub mod service;

pub use models::*;
pub use service::*;
