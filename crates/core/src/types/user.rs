//! User profile and signed-in session records.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Public profile of a user.
///
/// The backend sends the primary key twice (`id` and `_id`). Absent fields
/// are omitted when serialized so a stored profile round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// A signed-in user: bearer token plus profile.
///
/// This is what login, registration, and profile updates return, and what
/// the client mirrors under the `userInfo` key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Bearer token sent with every authenticated request.
    pub token: String,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl UserInfo {
    /// Whether the signed-in user has staff privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.is_admin.unwrap_or(false)
    }
}

impl std::fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInfo")
            .field("token", &"[REDACTED]")
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_minimal_roundtrip_is_byte_stable() {
        let raw = r#"{"token":"t1","name":"A"}"#;
        let info: UserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.token, "t1");
        assert_eq!(info.profile.name.as_deref(), Some("A"));
        assert_eq!(serde_json::to_string(&info).unwrap(), raw);
    }

    #[test]
    fn test_user_info_full_backend_payload() {
        let info: UserInfo = serde_json::from_str(
            r#"{"id":4,"_id":4,"username":"a@b.c","email":"a@b.c","name":"Ann","isAdmin":true,"token":"abc"}"#,
        )
        .unwrap();
        assert_eq!(info.profile.id, Some(UserId::new(4)));
        assert_eq!(info.profile.pk, Some(UserId::new(4)));
        assert!(info.is_admin());
    }

    #[test]
    fn test_user_info_debug_redacts_token() {
        let info = UserInfo {
            token: "super_secret_token".to_string(),
            profile: UserProfile::default(),
        };
        let debug_output = format!("{info:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}
