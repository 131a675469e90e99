//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_API_URL` - Backend origin; the REST API lives under `/api`
//!   (default: `http://127.0.0.1:8000`)
//! - `SHOPFRONT_STATE_DIR` - Directory holding the persistent mirror
//!   (default: `.shopfront`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_STATE_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (scheme, host, port, optional path prefix)
    pub api_url: Url,
    /// Directory for the file-backed persistent mirror
    pub state_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ClientConfig {
    /// Configuration pointing at `api_url` with every other setting defaulted.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(
            "SHOPFRONT_API_URL",
            &get_env_or_default("SHOPFRONT_API_URL", DEFAULT_API_URL),
        )?;
        let state_dir = PathBuf::from(get_env_or_default("SHOPFRONT_STATE_DIR", DEFAULT_STATE_DIR));

        Ok(Self {
            api_url,
            state_dir,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating an empty value as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse the backend origin. Only absolute `http`/`https` URLs are accepted.
fn parse_api_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not contain a query string or fragment".to_string(),
        ));
    }

    Ok(url)
}
