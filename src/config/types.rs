use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub export: ExportDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub providers: Vec<ProviderConfig>,
}

/// Default settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Name of the provider used when none is given on the command line.
    pub provider: String,
}

/// Defaults applied to export requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// File name used when none is given (extension optional).
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Whether exports are shareable by default.
    #[serde(default)]
    pub public: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "cloudexport=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// A folder-backed provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Unique identifier (e.g., "local", "team-share").
    pub name: String,
    /// Display name in UI.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Directory uploads are stored under.
    pub root: PathBuf,
    /// Base URL under which public uploads are served.
    #[serde(default)]
    pub sharing_base_url: Option<String>,
}

fn default_file_name() -> String {
    "map".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cloudexport")
        .join("exports")
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            provider: "local".to_string(),
        }
    }
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            public: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "local".to_string(),
            display_name: Some("Local folder".to_string()),
            icon: None,
            root: default_provider_root(),
            sharing_base_url: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            export: ExportDefaults::default(),
            logging: LoggingConfig::default(),
            providers: vec![ProviderConfig::default()],
        }
    }
}
