//! Client configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{API_BASE_LIVE, API_BASE_SANDBOX, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};
use crate::impl_domain_status_conversions;

/// PayPal environment selecting the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl_domain_status_conversions!(Environment {
    Sandbox => "sandbox",
    Live => "live" | "production",
});

impl Environment {
    /// Versioned REST base URL for this environment
    pub fn api_base(self) -> &'static str {
        match self {
            Self::Sandbox => API_BASE_SANDBOX,
            Self::Live => API_BASE_LIVE,
        }
    }
}

/// Settings for the shared authenticated client
///
/// `client_secret` is skipped by `Debug` output to keep it out of logs.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base including the version segment, e.g. `https://api.sandbox.paypal.com/v1`
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total tries per request (initial attempt included)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Sandbox configuration with default timeout and attempts
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            api_base: default_api_base(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            user_agent: None,
        }
    }

    /// Point at the given environment's base URL
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.api_base = environment.api_base().to_string();
        self
    }

    /// Use a custom base URL; a trailing slash is dropped
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Per-attempt request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("max_attempts", &self.max_attempts)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_api_base() -> String {
    API_BASE_SANDBOX.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Sandbox.api_base(), "https://api.sandbox.paypal.com/v1");
        assert_eq!(Environment::Live.api_base(), "https://api.paypal.com/v1");
        assert_eq!("PRODUCTION".parse::<Environment>(), Ok(Environment::Live));
    }

    #[test]
    fn test_new_uses_sandbox_defaults() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.api_base, API_BASE_SANDBOX);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_with_api_base_trims_trailing_slash() {
        let config = ClientConfig::new("id", "secret").with_api_base("http://127.0.0.1:8080/v1/");
        assert_eq!(config.api_base, "http://127.0.0.1:8080/v1");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "client_id": "abc", "client_secret": "xyz" }"#).unwrap();
        assert_eq!(config, ClientConfig::new("abc", "xyz"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", ClientConfig::new("abc", "super-secret"));
        assert!(rendered.contains("abc"));
        assert!(!rendered.contains("super-secret"));
    }
}
