pub mod load;
pub mod load_batch;
pub mod create;
pub mod find_by_device_code;
pub mod load_settings;
pub mod create_log;
pub mod record_store;

// Re-exports
pub use load::*;
pub use load_batch::*;
pub use create::*;
pub use find_by_device_code::*;
pub use load_settings::*;
pub use create_log::*;
pub use record_store::*;
