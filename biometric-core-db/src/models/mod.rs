pub mod identifiable;
pub mod scan_event;
pub mod employee;
pub mod settings;
pub mod derived_record;
pub mod biometric_log;

// Re-exports
pub use identifiable::*;
pub use scan_event::*;
pub use employee::*;
pub use settings::*;
pub use derived_record::*;
pub use biometric_log::*;
