//! Unified error handling with Sentry integration.
//!
//! Subsystems report their own error types; [`Error`] wraps them for callers
//! that drive several at once (store construction, the CLI).

use shopfront_core::UserInfo;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Persistent mirror could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Message suitable for showing to a user. Backend errors use the
    /// server's `detail` when it sent one.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api(err) => err.message(),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Set the Sentry user context from a signed-in session.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(info: &UserInfo) {
    let id = info
        .profile
        .id
        .or(info.profile.pk)
        .map(|id| id.to_string());
    let email = info.profile.email.clone();

    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id,
            email,
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb to the trail attached to later Sentry events.
pub fn add_breadcrumb(
    category: &str,
    message: &str,
    level: sentry::Level,
    data: Option<&[(&str, &str)]>,
) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
