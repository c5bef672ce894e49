//! Application settings loaded from `config.toml` in the app directory.
//!
//! Config keys: `api_base_url`, `log_filter`, `[labels]`.
//! `SPORECHECK_API_URL` overrides `api_base_url` when set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::app_dirs::{self, AppDirError};
use crate::form::LabelDictionary;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "SPORECHECK_API_URL";
/// Service address used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    Dir(#[from] AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// The service base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL `{value}`: {reason}")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default)]
    log_filter: Option<String>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

/// Resolved settings for one session.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub log_filter: Option<String>,
    pub labels: LabelDictionary,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, applying the environment override.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let env_url = std::env::var(API_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    load_from(&path, env_url.as_deref())
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path, api_url_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let settings = read_settings(path)?;
    let raw_url = api_url_override
        .map(str::to_string)
        .or(settings.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    Ok(AppConfig {
        api_base_url: parse_base_url(&raw_url)?,
        log_filter: settings.log_filter.filter(|filter| !filter.trim().is_empty()),
        labels: LabelDictionary::english().with_overrides(settings.labels),
    })
}

fn read_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse and check a service base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{other}`"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }
    Ok(url)
}
