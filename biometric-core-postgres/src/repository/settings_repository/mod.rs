pub mod repo_impl;
pub mod load_settings;

pub use repo_impl::SettingsRepositoryImpl;
