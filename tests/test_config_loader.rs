use std::fs;

use bitkit_rust::bitkit_common_rs::bytes::bit_array::BitOrder;
use bitkit_rust::bitkit_common_rs::core::exceptions::UtilError;
use bitkit_rust::bitkit_common_rs::utils::config_loader::{BitkitConfig, ConfigLoader, OutputFormat};
use bitkit_rust::bitkit_common_rs::utils::log_config::LogLevel;
use tempfile::tempdir;

#[test]
fn test_load_toml_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bitkit.toml");
    fs::write(
        &path,
        r#"
[output]
format = "hex"
bit_order = "highest"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("BITKIT_TEST_TOML_")
        .load()
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Hex);
    assert_eq!(config.output.bit_order, BitOrder::Highest);
    // Missing keys fall back to defaults
    assert_eq!(config.output.min_bits, 0);
    assert_eq!(config.log_level().unwrap(), LogLevel::Debug);
}

#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bitkit.json");
    fs::write(&path, r#"{ "output": { "format": "int", "min_bits": 16 } }"#).unwrap();

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("BITKIT_TEST_JSON_")
        .load()
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Int);
    assert_eq!(config.output.min_bits, 16);
    assert_eq!(config.output.bit_order, BitOrder::Lowest);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_env_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bitkit.toml");
    fs::write(&path, "[output]\nformat = \"hex\"\n").unwrap();

    std::env::set_var("BITKIT_TEST_ENV_OUTPUT_FORMAT", "binary");
    std::env::set_var("BITKIT_TEST_ENV_BIT_ORDER", "highest");
    std::env::set_var("BITKIT_TEST_ENV_MIN_BITS", "32");

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("BITKIT_TEST_ENV_")
        .load()
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Binary);
    assert_eq!(config.output.bit_order, BitOrder::Highest);
    assert_eq!(config.output.min_bits, 32);
}

#[test]
fn test_invalid_env_value_is_rejected() {
    std::env::set_var("BITKIT_TEST_BAD_BIT_ORDER", "sideways");

    let result = ConfigLoader::with_paths(vec![])
        .with_env_prefix("BITKIT_TEST_BAD_")
        .load();
    assert!(matches!(result, Err(UtilError::Config(_))));
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bitkit.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("BITKIT_TEST_LEVEL_")
        .load();
    assert!(matches!(result, Err(UtilError::Config(_))));
}

#[test]
fn test_unparsable_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bitkit.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("BITKIT_TEST_BROKEN_")
        .load()
        .unwrap();
    assert_eq!(config, BitkitConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let loader = ConfigLoader::new().with_env_prefix("BITKIT_TEST_SAVE_");

    let mut config = BitkitConfig::default();
    config.output.format = OutputFormat::Hex;
    config.output.bit_order = BitOrder::Highest;
    config.output.min_bits = 68;
    config.logging.level = "info".into();

    for name in ["saved.toml", "saved.json"] {
        let path = dir.path().join(name);
        loader.save_config(&config, &path).unwrap();

        let reloaded = ConfigLoader::with_paths(vec![path])
            .with_env_prefix("BITKIT_TEST_SAVE_")
            .load()
            .unwrap();
        assert_eq!(reloaded, config, "round trip through {}", name);
    }

    let unsupported = dir.path().join("saved.yaml");
    assert!(matches!(
        loader.save_config(&config, &unsupported),
        Err(UtilError::Config(_))
    ));
}
