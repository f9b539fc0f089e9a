//! ログ・設定ユーティリティ

pub mod config_loader;
pub mod log_config;

pub use config_loader::{BitkitConfig, ConfigLoader, LogConfig, OutputConfig, OutputFormat};
pub use log_config::{init_logger, LogLevel};
