//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Read every supported environment variable
//! 2. If the environment carries no usable credentials, fall back to a
//!    config file (`TRAVEX_CONFIG`, or the first probed path)
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CONCUR_ACCESS_TOKEN`: Pre-issued access token
//! - `CONCUR_REFRESH_TOKEN`: Refresh token for the refresh grant
//! - `CONCUR_CLIENT_ID` / `CONCUR_CLIENT_SECRET`: OAuth client pair
//! - `CONCUR_BASE_URL`: API base (default `https://us.api.concursolutions.com`)
//! - `CONCUR_TOKEN_URL`: Token endpoint (default `<base>/oauth2/v0/token`)
//! - `CONCUR_USER_ID`: User UUID; resolved via the identity API when unset
//! - `CONCUR_PER_DIEM_EXPENSE_TYPE`: Expense type for per-diem entries
//! - `CONCUR_DEFAULT_CURRENCY`: Currency used when a request omits one
//! - `TRAVEX_HTTP_TIMEOUT_SECS`: Outbound request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./travex.toml` or `./travex.json` (current working directory)
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};

use serde::Deserialize;
use travex_domain::constants::{
    CONCUR_TOKEN_PATH, DEFAULT_CONCUR_BASE_URL, DEFAULT_CURRENCY, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_PER_DIEM_EXPENSE_TYPE,
};
use travex_domain::{Credentials, Result, TravexError};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "TRAVEX_CONFIG";

const CONFIG_FILE_NAMES: [&str; 2] = ["travex.toml", "travex.json"];

/// Concur endpoint and expense defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConcurSettings {
    pub base_url: String,
    pub token_url: Option<String>,
    pub user_id: Option<String>,
    pub per_diem_expense_type: String,
    pub default_currency: String,
}

impl Default for ConcurSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONCUR_BASE_URL.to_string(),
            token_url: None,
            user_id: None,
            per_diem_expense_type: DEFAULT_PER_DIEM_EXPENSE_TYPE.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ConcurSettings {
    /// Configured token endpoint, or the one derived from the base URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        self.token_url.clone().unwrap_or_else(|| {
            format!("{}{CONCUR_TOKEN_PATH}", self.base_url.trim_end_matches('/'))
        })
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub concur: ConcurSettings,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

const fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            concur: ConcurSettings::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Load configuration with automatic fallback strategy
///
/// The environment wins when it carries usable credentials. Otherwise a
/// config file is used if one is named or found; failing that the
/// environment result is returned for the caller to validate.
///
/// # Errors
/// Returns `TravexError::Config` if an environment value is malformed or a
/// selected config file cannot be read or parsed.
pub fn load() -> Result<AppConfig> {
    let env_config = load_from_env()?;
    if env_config.credentials.validate().is_ok() {
        tracing::info!("Configuration loaded from environment variables");
        return Ok(env_config);
    }

    let explicit = non_empty_var(CONFIG_PATH_VAR).map(PathBuf::from);
    if explicit.is_some() || probe_config_paths().is_some() {
        tracing::debug!("No credentials in environment, trying config file");
        return load_from_file(explicit);
    }

    Ok(env_config)
}

/// Load configuration from environment variables
///
/// Every variable is optional; unset or blank values keep their defaults.
///
/// # Errors
/// Returns `TravexError::Config` if `TRAVEX_HTTP_TIMEOUT_SECS` is not a
/// positive integer.
pub fn load_from_env() -> Result<AppConfig> {
    let defaults = ConcurSettings::default();

    let http_timeout_secs = match non_empty_var("TRAVEX_HTTP_TIMEOUT_SECS") {
        Some(raw) => parse_timeout(&raw)?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    Ok(AppConfig {
        credentials: Credentials {
            access_token: non_empty_var("CONCUR_ACCESS_TOKEN"),
            refresh_token: non_empty_var("CONCUR_REFRESH_TOKEN"),
            client_id: non_empty_var("CONCUR_CLIENT_ID"),
            client_secret: non_empty_var("CONCUR_CLIENT_SECRET"),
        },
        concur: ConcurSettings {
            base_url: non_empty_var("CONCUR_BASE_URL").unwrap_or(defaults.base_url),
            token_url: non_empty_var("CONCUR_TOKEN_URL"),
            user_id: non_empty_var("CONCUR_USER_ID"),
            per_diem_expense_type: non_empty_var("CONCUR_PER_DIEM_EXPENSE_TYPE")
                .unwrap_or(defaults.per_diem_expense_type),
            default_currency: non_empty_var("CONCUR_DEFAULT_CURRENCY")
                .unwrap_or(defaults.default_currency),
        },
        http_timeout_secs,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TravexError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TravexError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TravexError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TravexError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: AppConfig = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TravexError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| TravexError::Config(format!("Invalid JSON format: {e}")))?,
        _ => {
            return Err(TravexError::Config(format!("Unsupported config format: {extension}")))
        }
    };

    if config.http_timeout_secs == 0 {
        return Err(TravexError::Config("http_timeout_secs must be positive".into()));
    }

    Ok(config)
}

/// Probe standard paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(TravexError::Config(format!(
            "Invalid TRAVEX_HTTP_TIMEOUT_SECS: {raw:?} (expected a positive integer)"
        ))),
        Ok(secs) => Ok(secs),
    }
}

/// Environment variable value, with blank treated as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
