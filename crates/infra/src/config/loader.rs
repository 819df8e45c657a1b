//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment if one exists
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PAYPAL_CLIENT_ID`: REST app client id (required)
//! - `PAYPAL_CLIENT_SECRET`: REST app secret (required)
//! - `PAYPAL_API_BASE`: API base URL including `/v1`
//! - `PAYPAL_ENVIRONMENT`: `sandbox` or `live`, used when no API base is set
//! - `PAYPAL_TIMEOUT_SECS`: Per-attempt request timeout in seconds
//! - `PAYPAL_MAX_ATTEMPTS`: Total tries per request
//! - `PAYPAL_USER_AGENT`: User agent sent with every request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./paypal.json` or `./paypal.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)

use std::path::{Path, PathBuf};

use paypal_agreements_domain::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use paypal_agreements_domain::{ClientConfig, Environment, PaypalError, Result};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// Environment variables win whenever either credential variable is set;
/// their errors are returned as-is. Only when neither `PAYPAL_CLIENT_ID` nor
/// `PAYPAL_CLIENT_SECRET` is present does loading fall back to a config file.
///
/// # Errors
/// Returns `PaypalError::Config` if:
/// - Environment configuration is incomplete or invalid
/// - No config file is found when the environment has no credentials
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    if !env_has_credentials() {
        tracing::debug!("No PayPal credentials in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!(api_base = %config.api_base, "Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `PaypalError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ClientConfig> {
    let client_id = env_var("PAYPAL_CLIENT_ID")?;
    let client_secret = env_var("PAYPAL_CLIENT_SECRET")?;

    let api_base = match std::env::var("PAYPAL_API_BASE").ok().filter(|s| !s.trim().is_empty()) {
        Some(base) => base,
        None => {
            let environment = match std::env::var("PAYPAL_ENVIRONMENT") {
                Ok(value) => value
                    .parse::<Environment>()
                    .map_err(|e| PaypalError::Config(format!("Invalid environment: {}", e)))?,
                Err(_) => Environment::default(),
            };
            environment.api_base().to_string()
        }
    };

    let timeout_secs = env_parse("PAYPAL_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
    let max_attempts = env_parse("PAYPAL_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
    let user_agent = std::env::var("PAYPAL_USER_AGENT").ok();

    validate(ClientConfig {
        api_base,
        client_id,
        client_secret,
        timeout_secs,
        max_attempts,
        user_agent,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `PaypalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PaypalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PaypalError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PaypalError::Config(format!("Failed to read config file: {}", e)))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PaypalError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PaypalError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PaypalError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Check required fields and normalize the API base
///
/// # Errors
/// Returns `PaypalError::Config` for blank credentials, a non-http(s) API
/// base, a zero timeout or zero attempts.
pub fn validate(mut config: ClientConfig) -> Result<ClientConfig> {
    if config.client_id.trim().is_empty() {
        return Err(PaypalError::Config("client_id must not be empty".to_string()));
    }
    if config.client_secret.trim().is_empty() {
        return Err(PaypalError::Config("client_secret must not be empty".to_string()));
    }

    let url = Url::parse(config.api_base.trim())
        .map_err(|e| PaypalError::Config(format!("Invalid API base '{}': {}", config.api_base, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(PaypalError::Config(format!(
            "API base must use http or https: {}",
            config.api_base
        )));
    }
    config.api_base = config.api_base.trim().trim_end_matches('/').to_string();

    if config.timeout_secs == 0 {
        return Err(PaypalError::Config("timeout_secs must be greater than zero".to_string()));
    }
    if config.max_attempts == 0 {
        return Err(PaypalError::Config("max_attempts must be at least 1".to_string()));
    }

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("paypal.json"),
            cwd.join("paypal.toml"),
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Whether either credential variable is set
fn env_has_credentials() -> bool {
    ["PAYPAL_CLIENT_ID", "PAYPAL_CLIENT_SECRET"].iter().any(|key| std::env::var_os(key).is_some())
}

/// Get required environment variable
///
/// # Errors
/// Returns `PaypalError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        PaypalError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric environment variable, falling back to `default`
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| PaypalError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
