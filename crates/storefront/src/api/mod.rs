//! REST client for the storefront backend.
//!
//! # Architecture
//!
//! - Thin wrapper over `reqwest`: one method per endpoint, JSON in and out
//! - Every call is attempted exactly once: no retries, no timeouts, no caching
//! - Authenticated endpoints take an optional bearer token; a missing token
//!   just means no `Authorization` header, and the backend's 401 comes back
//!   as an ordinary [`ApiError::Status`]
//!
//! # Errors
//!
//! Callers that need a single display string use [`ApiError::message`],
//! which prefers the backend's `detail` field.

mod client;

pub use client::ApiClient;

use reqwest::StatusCode;
use secrecy::SecretString;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {}", .status.as_u16())]
    Status {
        /// HTTP status returned by the backend.
        status: StatusCode,
        /// Server-supplied `detail` field, when the error body had one.
        detail: Option<String>,
    },

    /// A 2xx response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint URL could not be built.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Human-readable message for display and for FAIL actions.
    ///
    /// Returns the backend's `detail` when present, otherwise this error's
    /// display text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => self.to_string(),
        }
    }

    /// HTTP status, if the backend responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the `detail` field out of an error body, if it is JSON and has one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if detail.is_empty() => None,
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Product listing query: search keyword and page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub keyword: Option<String>,
    pub page: Option<u32>,
}

impl ProductQuery {
    /// Query for a keyword search.
    #[must_use]
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            page: None,
        }
    }

    /// Parse a location search string such as `?keyword=phone&page=2`.
    ///
    /// Unknown parameters are ignored, as is a page number that does not
    /// parse.
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut query = Self::default();

        for (key, value) in url::form_urlencoded::parse(search.as_bytes()) {
            match key.as_ref() {
                "keyword" => query.keyword = Some(value.into_owned()),
                "page" => query.page = value.parse().ok(),
                _ => {}
            }
        }

        query
    }
}

/// Login credentials. The backend authenticates by username, which is the
/// account's email address.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// New account details.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Profile changes. `None` fields are left out of the request body.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}
