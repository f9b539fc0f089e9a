use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::bitkit_common_rs::bytes::bit_array::{BitArray, BitOrder};
use crate::bitkit_common_rs::core::exceptions::{UtilError, UtilResult};
use crate::bitkit_common_rs::utils::log_config::LogLevel;

/// ビット配列の表示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat { #[default] Binary, Hex, Int }

impl OutputFormat {
    pub fn render(&self, bits: &BitArray) -> String {
        match self { OutputFormat::Binary => bits.to_string(), OutputFormat::Hex => bits.to_hex_string(), OutputFormat::Int => bits.to_int_string() }
    }
}

impl FromStr for OutputFormat {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "hex" => Ok(OutputFormat::Hex),
            "int" | "dec" => Ok(OutputFormat::Int),
            _ => Err(UtilError::Config(format!("Invalid output format: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig { pub format: OutputFormat, pub bit_order: BitOrder, pub min_bits: usize }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig { pub level: String }
impl Default for LogConfig { fn default() -> Self { Self { level: "warn".into() } } }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitkitConfig {
    pub output: OutputConfig,
    pub logging: LogConfig,
}

impl BitkitConfig {
    pub fn log_level(&self) -> UtilResult<LogLevel> { self.logging.level.parse() }
}

pub struct ConfigLoader { config_paths: Vec<PathBuf>, env_prefix: String }
impl ConfigLoader {
    pub fn new() -> Self { Self { config_paths: vec![PathBuf::from("bitkit.toml"), PathBuf::from("bitkit.json")], env_prefix: "BITKIT_".into() } }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { config_paths: paths, env_prefix: "BITKIT_".into() } }
    pub fn with_env_prefix(mut self, prefix: &str) -> Self { self.env_prefix = prefix.to_string(); self }

    /// 最初に見つかった設定ファイル → 環境変数 の順で上書きし、検証して返す
    pub fn load(&self) -> UtilResult<BitkitConfig> {
        let mut config = BitkitConfig::default();
        for path in &self.config_paths {
            if path.exists() {
                match self.load_from_file(path) {
                    Ok(fc) => { debug!("Loaded config from {:?}", path); config = fc; break; }
                    Err(e) => { warn!("Failed to load config from {:?}: {}", path, e); }
                }
            }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    fn load_from_file(&self, path: &Path) -> UtilResult<BitkitConfig> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| UtilError::Config(format!("Failed to parse JSON config: {}", e))),
            Some("toml") => toml::from_str(&content).map_err(|e| UtilError::Config(format!("Failed to parse TOML config: {}", e))),
            _ => Err(UtilError::Config("Unsupported config file format".into())),
        }
    }

    fn apply_env_overrides(&self, mut config: BitkitConfig) -> UtilResult<BitkitConfig> {
        if let Ok(format) = env::var(format!("{}OUTPUT_FORMAT", self.env_prefix)) { config.output.format = format.parse()?; }
        if let Ok(order) = env::var(format!("{}BIT_ORDER", self.env_prefix)) { config.output.bit_order = order.parse().map_err(|_| UtilError::Config(format!("Invalid bit order in environment variable: {}", order)))?; }
        if let Ok(min_bits) = env::var(format!("{}MIN_BITS", self.env_prefix)) { config.output.min_bits = min_bits.parse().map_err(|_| UtilError::Config("Invalid min bits in environment variable".into()))?; }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) { config.logging.level = level; }
        Ok(config)
    }

    fn validate_config(&self, config: &BitkitConfig) -> UtilResult<()> {
        config.log_level()?;
        Ok(())
    }

    pub fn save_config(&self, config: &BitkitConfig, path: &Path) -> UtilResult<()> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| UtilError::Config(format!("Failed to serialize config to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(config).map_err(|e| UtilError::Config(format!("Failed to serialize config to TOML: {}", e)))?,
            _ => return Err(UtilError::Config("Unsupported config file format for saving".into())),
        };
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ConfigLoader { fn default() -> Self { Self::new() } }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_render() {
        let bits = BitArray::from_bytes(&[0x01, 0x00]);
        assert_eq!(OutputFormat::Binary.render(&bits), "0000000100000000");
        assert_eq!(OutputFormat::Hex.render(&bits), "0100");
        assert_eq!(OutputFormat::Int.render(&bits), "256");
        assert_eq!("dec".parse::<OutputFormat>().unwrap(), OutputFormat::Int);
    }

    #[test]
    fn test_defaults_when_no_file() {
        let loader = ConfigLoader::with_paths(vec![PathBuf::from("/nonexistent/bitkit.toml")]).with_env_prefix("BITKIT_UNIT_DEFAULTS_");
        let config = loader.load().unwrap();
        assert_eq!(config, BitkitConfig::default());
        assert_eq!(config.output.bit_order, BitOrder::Lowest);
    }
}
