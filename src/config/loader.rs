//! Configuration file loading with precedence handling.

use crate::config::Credential;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Result cap sent with every user search.
pub const DEFAULT_SEARCH_PER_PAGE: u8 = 5;

/// Largest page size the search endpoint accepts.
pub const MAX_SEARCH_PER_PAGE: u8 = 100;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "GHSCOUT_CONFIG";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GHSCOUT_API_URL";

/// Environment variable carrying the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but its value is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Config key.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/ghscout/config.toml`.
/// The GitHub token is deliberately absent: it is only read from the
/// environment.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// API root, e.g. a GitHub Enterprise `https://ghe.example.com/api/v3`.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Number of users requested per search.
    #[serde(default)]
    pub search_per_page: Option<u8>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API root URL.
    pub api_base_url: String,
    /// Users requested per search, `1..=100`.
    pub search_per_page: u8,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Token for the search request; `None` searches unauthenticated.
    pub credential: Option<Credential>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_per_page: DEFAULT_SEARCH_PER_PAGE,
            log_file_path: default_log_path(),
            credential: None,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ghscout/ghscout.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when there is no state
/// directory (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ghscout").join("ghscout.log")
    } else {
        PathBuf::from("ghscout.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghscout").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GHSCOUT_CONFIG` environment variable
/// 3. Default path `~/.config/ghscout/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when `search_per_page` is outside
/// `1..=100`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let search_per_page = match config.search_per_page {
        Some(n) => validate_per_page(n)?,
        None => defaults.search_per_page,
    };

    Ok(ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        search_per_page,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        credential: defaults.credential,
    })
}

fn validate_per_page(n: u8) -> Result<u8, ConfigError> {
    if (1..=MAX_SEARCH_PER_PAGE).contains(&n) {
        Ok(n)
    } else {
        Err(ConfigError::InvalidValue {
            key: "search_per_page",
            reason: format!("{} is not in 1..={}", n, MAX_SEARCH_PER_PAGE),
        })
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GHSCOUT_API_URL`: Override the API base URL
/// - `GITHUB_TOKEN`: Credential for the search request (empty means absent)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_base_url = url;
        }
    }

    if let Some(credential) = Credential::from_env_value(std::env::var(TOKEN_ENV).ok()) {
        config.credential = Some(credential);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_url_override: Option<String>,
    per_page_override: Option<u8>,
) -> ResolvedConfig {
    if let Some(url) = api_url_override {
        config.api_base_url = url;
    }

    if let Some(per_page) = per_page_override {
        config.search_per_page = per_page;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
