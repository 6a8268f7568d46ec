use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::errors::ConfigError;

/// Library configuration module
/// This module handles the configuration shared by the CDN helpers and
/// the logger, including loading, validating and saving settings.
/// Represents the library configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// CDN settings
    #[serde(default)]
    pub cdn: CdnConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Where user and subtitle assets are served from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CdnConfig {
    // @field: Base URL of the CDN, scheme included
    #[serde(default = "default_cdn_base_url")]
    pub base_url: String,

    // @field: Path prefix for user avatars
    #[serde(default = "default_avatar_path")]
    pub avatar_path: String,

    // @field: Path prefix for user banners
    #[serde(default = "default_banner_path")]
    pub banner_path: String,

    // @field: Path prefix for subtitle files
    #[serde(default = "default_subtitle_path")]
    pub subtitle_path: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            base_url: default_cdn_base_url(),
            avatar_path: default_avatar_path(),
            banner_path: default_banner_path(),
            subtitle_path: default_subtitle_path(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
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
    // @returns: Matching `log` filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::InvalidValue {
                field: "log_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Environment variable overriding `cdn.base_url`
pub const CDN_URL_ENV: &str = "CDN_URL";

/// Environment variable overriding `log_level`
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

fn default_cdn_base_url() -> String {
    "https://cdn.example.com".to_string()
}

fn default_avatar_path() -> String {
    "avatars".to_string()
}

fn default_banner_path() -> String {
    "banners".to_string()
}

fn default_subtitle_path() -> String {
    "subtitles".to_string()
}

impl Config {
    /// Parse a configuration from JSON, filling in defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        info!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Apply overrides from the environment
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(CDN_URL_ENV).filter(|value| !value.trim().is_empty()) {
            self.cdn.base_url = base_url.trim().to_string();
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|value| !value.trim().is_empty()) {
            self.log_level = level.parse()?;
        }

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_cdn_base_url(&self.cdn.base_url)?;

        let prefixes = [
            ("cdn.avatar_path", &self.cdn.avatar_path),
            ("cdn.banner_path", &self.cdn.banner_path),
            ("cdn.subtitle_path", &self.cdn.subtitle_path),
        ];
        for (name, value) in prefixes {
            if value.trim_matches('/').trim().is_empty() {
                return Err(ConfigError::MissingValue(name.to_string()));
            }
        }

        Ok(())
    }
}

/// Parse a CDN base URL, accepting only http and https
pub fn validate_cdn_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidCdnUrl {
        url: base_url.to_string(),
        reason,
    };

    if base_url.trim().is_empty() {
        return Err(ConfigError::MissingValue("cdn.base_url".to_string()));
    }

    let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    Ok(url)
}
