/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use xliffdoc::app_config::{Config, LogLevel, XliffConfig};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.xliff, XliffConfig::default());
    assert_eq!(config.xliff.source_language, "en");
    assert_eq!(config.xliff.target_language, "jp");
    assert_eq!(config.xliff.original, "documentation");
    assert_eq!(config.xliff.tool_id, "xliffdoc");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&config_path)?;

    assert!(config_path.exists());
    assert_eq!(config.xliff.target_language, "jp");

    let reloaded = Config::load(&config_path)?;
    assert_eq!(reloaded.xliff, config.xliff);
    Ok(())
}

/// Test loading a hand-written config file
#[test]
fn test_load_withCustomValues_shouldOverrideDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "xliff": { "target_language": "de", "original": "handbook" }, "log_level": "debug" }"#,
    )?;

    let config = Config::load(&config_path)?;

    assert_eq!(config.xliff.source_language, "en");
    assert_eq!(config.xliff.target_language, "de");
    assert_eq!(config.xliff.original, "handbook");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that broken JSON is reported
#[test]
fn test_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let error = Config::load(&config_path).unwrap_err();

    assert!(error.to_string().contains("Failed to parse config file"));
    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.xliff.original = "".to_string();
    assert!(config.validate().is_err());
    config.xliff.original = "documentation".to_string();

    config.xliff.tool_id = "  ".to_string();
    assert!(config.validate().is_err());
    config.xliff.tool_id = "xliffdoc".to_string();

    config.xliff.target_language = "en".to_string();
    assert!(config.validate().is_err());
}
