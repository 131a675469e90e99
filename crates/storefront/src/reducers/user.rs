//! Session and account slices.

use serde::Serialize;
use shopfront_core::{UserInfo, UserProfile};

use super::is_false;
use crate::action::Action;

/// The signed-in session. `user_info` is hydrated from the mirror at start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserLoginState {
    /// Bearer token of the signed-in user.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user_info.as_ref().map(|info| info.token.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDetailsState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    pub user: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateProfileState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[must_use]
pub fn user_login(state: UserLoginState, action: &Action) -> UserLoginState {
    match action {
        Action::UserLoginRequest => UserLoginState {
            loading: true,
            ..UserLoginState::default()
        },
        Action::UserLoginSuccess(info) => UserLoginState {
            user_info: Some(info.clone()),
            ..UserLoginState::default()
        },
        Action::UserLoginFail(message) => UserLoginState {
            error: Some(message.clone()),
            ..UserLoginState::default()
        },
        Action::UserLogout => UserLoginState::default(),
        _ => state,
    }
}

#[must_use]
pub fn user_register(state: UserRegisterState, action: &Action) -> UserRegisterState {
    match action {
        Action::UserRegisterRequest => UserRegisterState {
            loading: true,
            ..UserRegisterState::default()
        },
        Action::UserRegisterSuccess(info) => UserRegisterState {
            user_info: Some(info.clone()),
            ..UserRegisterState::default()
        },
        Action::UserRegisterFail(message) => UserRegisterState {
            error: Some(message.clone()),
            ..UserRegisterState::default()
        },
        Action::UserLogout => UserRegisterState::default(),
        _ => state,
    }
}

#[must_use]
pub fn user_details(state: UserDetailsState, action: &Action) -> UserDetailsState {
    match action {
        Action::UserDetailsRequest => UserDetailsState {
            loading: true,
            ..state
        },
        Action::UserDetailsSuccess(user) => UserDetailsState {
            user: user.clone(),
            ..UserDetailsState::default()
        },
        Action::UserDetailsFail(message) => UserDetailsState {
            error: Some(message.clone()),
            ..UserDetailsState::default()
        },
        Action::UserDetailsReset => UserDetailsState::default(),
        _ => state,
    }
}

#[must_use]
pub fn user_update_profile(state: UserUpdateProfileState, action: &Action) -> UserUpdateProfileState {
    match action {
        Action::UserUpdateProfileRequest => UserUpdateProfileState {
            loading: true,
            ..UserUpdateProfileState::default()
        },
        Action::UserUpdateProfileSuccess(info) => UserUpdateProfileState {
            success: true,
            user_info: Some(info.clone()),
            ..UserUpdateProfileState::default()
        },
        Action::UserUpdateProfileFail(message) => UserUpdateProfileState {
            error: Some(message.clone()),
            ..UserUpdateProfileState::default()
        },
        Action::UserUpdateProfileReset => UserUpdateProfileState::default(),
        _ => state,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn info(token: &str, name: &str) -> UserInfo {
        serde_json::from_value(json!({ "token": token, "name": name })).unwrap()
    }

    #[test]
    fn test_login_success_then_logout() {
        let state = user_login(UserLoginState::default(), &Action::UserLoginRequest);
        assert!(state.loading);

        let state = user_login(state, &Action::UserLoginSuccess(info("t1", "A")));
        assert_eq!(state.token(), Some("t1"));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "userInfo": { "token": "t1", "name": "A" } })
        );

        assert_eq!(
            user_login(state, &Action::UserLogout),
            UserLoginState::default()
        );
    }

    #[test]
    fn test_login_request_drops_previous_session() {
        let signed_in = user_login(
            UserLoginState::default(),
            &Action::UserLoginSuccess(info("t1", "A")),
        );
        let state = user_login(signed_in, &Action::UserLoginRequest);
        assert!(state.token().is_none());
    }

    #[test]
    fn test_login_fail() {
        let state = user_login(
            UserLoginState::default(),
            &Action::UserLoginFail("No active account found with the given credentials".to_string()),
        );
        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_register_cleared_on_logout() {
        let state = user_register(
            UserRegisterState::default(),
            &Action::UserRegisterSuccess(info("t2", "B")),
        );
        assert!(state.user_info.is_some());
        assert_eq!(
            user_register(state, &Action::UserLogout),
            UserRegisterState::default()
        );
    }

    #[test]
    fn test_details_request_keeps_user_and_reset() {
        let profile = UserProfile {
            name: Some("Ann".to_string()),
            ..UserProfile::default()
        };
        let loaded = user_details(
            UserDetailsState::default(),
            &Action::UserDetailsSuccess(profile.clone()),
        );

        let state = user_details(loaded, &Action::UserDetailsRequest);
        assert!(state.loading);
        assert_eq!(state.user, profile);

        let state = user_details(state, &Action::UserDetailsReset);
        assert_eq!(state, UserDetailsState::default());
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({ "user": {} }));
    }

    #[test]
    fn test_update_profile_lifecycle() {
        let state = user_update_profile(
            UserUpdateProfileState::default(),
            &Action::UserUpdateProfileSuccess(info("t3", "C")),
        );
        assert!(state.success);
        assert_eq!(state.user_info.as_ref().map(|i| i.token.as_str()), Some("t3"));

        let state = user_update_profile(state, &Action::UserUpdateProfileReset);
        assert_eq!(state, UserUpdateProfileState::default());
    }

    #[test]
    fn test_user_reducers_ignore_foreign_actions() {
        let login = user_login(
            UserLoginState::default(),
            &Action::UserLoginSuccess(info("t1", "A")),
        );
        assert_eq!(user_login(login.clone(), &Action::UserDetailsReset), login);

        let details = UserDetailsState::default();
        assert_eq!(user_details(details.clone(), &Action::UserLogout), details);
    }
}
