use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// XLIFF file settings
    #[serde(default)]
    pub xliff: XliffConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings written into the XLIFF `file` and `header` elements
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct XliffConfig {
    /// Language of the documentation
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language the translators deliver
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Value of the `original` attribute
    #[serde(default = "default_original")]
    pub original: String,

    /// Tool declared in the header
    #[serde(default = "default_tool_id")]
    pub tool_id: String,

    #[serde(default = "default_tool_id")]
    pub tool_name: String,
}

impl Default for XliffConfig {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            original: default_original(),
            tool_id: default_tool_id(),
            tool_name: default_tool_id(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

// Translation vendors expect "jp", not the ISO "ja"
fn default_target_language() -> String {
    "jp".to_string()
}

fn default_original() -> String {
    "documentation".to_string()
}

fn default_tool_id() -> String {
    "xliffdoc".to_string()
}

impl Config {
    /// Load a configuration file, creating one with defaults if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let xliff = &self.xliff;

        for (name, value) in [
            ("source_language", &xliff.source_language),
            ("target_language", &xliff.target_language),
            ("original", &xliff.original),
            ("tool_id", &xliff.tool_id),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("Configuration value '{}' must not be empty", name));
            }
        }

        if xliff.source_language.eq_ignore_ascii_case(&xliff.target_language) {
            return Err(anyhow!(
                "Source and target language are both '{}'",
                xliff.source_language
            ));
        }

        Ok(())
    }
}
