//! Configuration module
//!
//! Settings are read from a TOML file
//! (`~/.config/finance-tracker/config.toml` by default). Missing sections
//! and fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::support::{ConfigError, PaginationConfig};

/// Default config location: `<config_dir>/finance-tracker/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finance-tracker")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_page_sizes"))]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    #[validate(range(min = 1))]
    pub max_page_size: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl TryFrom<&PaginationSettings> for PaginationConfig {
    type Error = ConfigError;

    fn try_from(settings: &PaginationSettings) -> Result<Self, Self::Error> {
        PaginationConfig::new(settings.default_page_size, settings.max_page_size)
    }
}

fn validate_page_sizes(settings: &PaginationSettings) -> Result<(), ValidationError> {
    if settings.max_page_size < settings.default_page_size {
        let mut err = ValidationError::new("max_below_default");
        err.message = Some("max_page_size must be >= default_page_size".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1))]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl AppConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Field-level validation.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        Ok(())
    }

    pub fn pagination_config(&self) -> Result<PaginationConfig, ConfigError> {
        PaginationConfig::try_from(&self.pagination)
    }
}
