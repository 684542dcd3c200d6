//! Built-in health checks for core systems

pub mod config;
pub mod field;
pub mod system_info;

pub use config::ConfigCheck;
pub use field::FieldCheck;
pub use system_info::SystemInfoCheck;
