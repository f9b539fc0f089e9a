use std::io::Write;
use std::str::FromStr;

use chrono::{DateTime, Local};
use env_logger::Env;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::bitkit_common_rs::core::exceptions::{UtilError, UtilResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel { Trace = 0, Debug = 1, Info = 2, Warn = 3, Error = 4 }

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self { LogLevel::Trace => "trace", LogLevel::Debug => "debug", LogLevel::Info => "info", LogLevel::Warn => "warn", LogLevel::Error => "error" }
    }

    pub fn to_level_filter(&self) -> LevelFilter {
        match self { LogLevel::Trace => LevelFilter::Trace, LogLevel::Debug => LevelFilter::Debug, LogLevel::Info => LevelFilter::Info, LogLevel::Warn => LevelFilter::Warn, LogLevel::Error => LevelFilter::Error }
    }
}

impl FromStr for LogLevel {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(UtilError::Config(format!("Invalid log level: {}", s))),
        }
    }
}

/// `[2024-01-01 12:00:00.000] [INFO] [target] message` 形式の1行
pub fn format_line(timestamp: DateTime<Local>, level: log::Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] [{}] {}", timestamp.format("%Y-%m-%d %H:%M:%S%.3f"), level, target, message)
}

/// env_logger を初期化する。RUST_LOG が設定されていればそちらを優先する
pub fn init_logger(level: LogLevel) -> UtilResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            writeln!(buf, "{}", format_line(Local::now(), record.level(), record.target(), &record.args().to_string()))
        })
        .try_init()
        .map_err(|e| UtilError::Config(format!("Failed to initialize logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
        assert!(LogLevel::Trace < LogLevel::Error);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_format_line() {
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let line = format_line(ts, log::Level::Info, "bitkit", "hello");
        assert_eq!(line, "[2024-01-02 03:04:05.000] [INFO] [bitkit] hello");
    }
}
