//! Integration tests for sign-in, registration, profile and logout.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use shopfront_core::{UserId, UserInfo};
use shopfront_integration_tests::{
    ADMIN_EMAIL, ADMIN_PASSWORD, CUSTOMER_EMAIL, CUSTOMER_NAME, CUSTOMER_PASSWORD, MockBackend,
};
use shopfront_storefront::reducers::{UserDetailsState, UserRegisterState};
use shopfront_storefront::storage::{keys, read_json};
use shopfront_storefront::{
    Action, Credentials, KeyValueStore, MemoryStore, ProfileUpdate, Registration, Store, actions,
};

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: SecretString::from(password),
    }
}

async fn sign_in_customer(store: &Store) {
    actions::login(store, &credentials(CUSTOMER_EMAIL, CUSTOMER_PASSWORD)).await;
    assert!(store.token().is_some(), "customer login failed");
}

// ============================================================================
// Login / Logout
// ============================================================================

#[tokio::test]
async fn test_login_mirrors_session() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    actions::login(&store, &credentials(CUSTOMER_EMAIL, CUSTOMER_PASSWORD)).await;

    let login = store.select(|state| state.user_login.clone());
    assert!(!login.loading);
    assert_eq!(login.error, None);
    let session = login.user_info.unwrap();
    assert!(session.token.starts_with("token-2-"));
    assert_eq!(session.profile.name.as_deref(), Some(CUSTOMER_NAME));
    assert!(!session.is_admin());

    let request = backend.last_request().unwrap();
    assert_eq!(request.path, "/api/users/login/");
    assert_eq!(request.authorization, None);

    let mirrored: UserInfo = read_json(&mirror, keys::USER_INFO).unwrap().unwrap();
    assert_eq!(mirrored, session);
}

#[tokio::test]
async fn test_login_with_bad_password() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    actions::login(&store, &credentials(CUSTOMER_EMAIL, "wrong")).await;

    let login = store.select(|state| state.user_login.clone());
    assert!(!login.loading);
    assert!(login.user_info.is_none());
    assert_eq!(
        login.error.as_deref(),
        Some("No active account found with the given credentials")
    );
    assert_eq!(mirror.get(keys::USER_INFO).unwrap(), None);
}

#[tokio::test]
async fn test_logout_forgets_session_data() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();
    sign_in_customer(&store).await;

    actions::get_user_details(&store, "profile").await;
    actions::list_my_orders(&store).await;
    assert!(store.select(|state| state.user_details.user.email.is_some()));

    actions::logout(&store);

    let state = store.state();
    assert!(state.user_login.user_info.is_none());
    assert_eq!(state.user_details, UserDetailsState::default());
    assert!(state.order_list_my.orders.is_empty());
    assert_eq!(store.token(), None);
    assert_eq!(mirror.get(keys::USER_INFO).unwrap(), None);

    let slices = serde_json::to_value(&state).unwrap();
    assert_eq!(slices["userLogin"], serde_json::json!({}));
    assert_eq!(slices["userDetails"], serde_json::json!({ "user": {} }));

    // Requests after logout go out unauthenticated
    actions::list_my_orders(&store).await;
    assert_eq!(backend.last_request().unwrap().authorization, None);
}

#[tokio::test]
async fn test_session_survives_restart() {
    let backend = MockBackend::start().await;
    let mirror = MemoryStore::new();

    let token = {
        let store = backend.store_with_mirror(&mirror);
        sign_in_customer(&store).await;
        store.token().unwrap()
    };

    let restarted = backend.store_with_mirror(&mirror);
    assert_eq!(restarted.token().as_deref(), Some(token.as_str()));

    actions::get_user_details(&restarted, "profile").await;
    assert_eq!(
        backend.last_request().unwrap().authorization,
        Some(format!("Bearer {token}"))
    );
    assert_eq!(
        restarted.select(|state| state.user_details.user.name.clone()),
        Some(CUSTOMER_NAME.to_string())
    );
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_signs_in() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    let registration = Registration {
        name: "Cleo".to_string(),
        email: "cleo@shopfront.test".to_string(),
        password: SecretString::from("cleo-pass"),
    };
    actions::register(&store, &registration).await;

    let state = store.state();
    let registered = state.user_register.user_info.clone().unwrap();
    assert_eq!(state.user_login.user_info, Some(registered.clone()));
    assert_eq!(registered.profile.email.as_deref(), Some("cleo@shopfront.test"));

    let mirrored: UserInfo = read_json(&mirror, keys::USER_INFO).unwrap().unwrap();
    assert_eq!(mirrored.token, registered.token);

    // The new account can sign in again with its password
    actions::logout(&store);
    assert_eq!(
        store.select(|state| state.user_register.clone()),
        UserRegisterState::default()
    );
    actions::login(&store, &credentials("cleo@shopfront.test", "cleo-pass")).await;
    assert!(store.token().is_some());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();

    let registration = Registration {
        name: "Ann again".to_string(),
        email: CUSTOMER_EMAIL.to_string(),
        password: SecretString::from("whatever"),
    };
    actions::register(&store, &registration).await;

    let register = store.select(|state| state.user_register.clone());
    assert!(register.user_info.is_none());
    assert_eq!(
        register.error.as_deref(),
        Some("User with this email already exists")
    );
    assert_eq!(store.token(), None);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_requires_session() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();

    actions::get_user_details(&store, "profile").await;

    let details = store.select(|state| state.user_details.clone());
    assert!(!details.loading);
    assert_eq!(
        details.error.as_deref(),
        Some("Authentication credentials were not provided.")
    );

    store.dispatch(Action::UserDetailsReset);
    assert_eq!(
        store.select(|state| state.user_details.clone()),
        UserDetailsState::default()
    );
}

#[tokio::test]
async fn test_user_lookup_by_id_is_staff_only() {
    let backend = MockBackend::start().await;

    let (customer, _) = backend.store();
    sign_in_customer(&customer).await;
    actions::get_user_details(&customer, "1").await;
    assert_eq!(
        customer.select(|state| state.user_details.error.clone()),
        Some("You do not have permission to perform this action.".to_string())
    );

    let (admin, _) = backend.store();
    actions::login(&admin, &credentials(ADMIN_EMAIL, ADMIN_PASSWORD)).await;
    actions::get_user_details(&admin, "2").await;

    let user = admin.select(|state| state.user_details.user.clone());
    assert_eq!(user.id, Some(UserId::new(2)));
    assert_eq!(user.name.as_deref(), Some(CUSTOMER_NAME));
    assert_eq!(backend.last_request().unwrap().path, "/api/users/2/");
}

#[tokio::test]
async fn test_update_profile_replaces_session() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();
    sign_in_customer(&store).await;
    let old_token = store.token().unwrap();

    let update = ProfileUpdate {
        name: Some("Ann B".to_string()),
        email: None,
        password: None,
    };
    actions::update_user_profile(&store, &update).await;

    let request = backend.last_request().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/users/profile/update/");
    assert_eq!(request.authorization, Some(format!("Bearer {old_token}")));

    let updated = store.select(|state| state.user_update_profile.clone());
    assert!(updated.success);
    let session = updated.user_info.unwrap();
    assert_eq!(session.profile.name.as_deref(), Some("Ann B"));

    // The refreshed session is the active one, in memory and in the mirror
    assert_eq!(store.token(), Some(session.token.clone()));
    assert_ne!(session.token, old_token);
    let mirrored: UserInfo = read_json(&mirror, keys::USER_INFO).unwrap().unwrap();
    assert_eq!(mirrored, session);

    actions::get_user_details(&store, "profile").await;
    assert_eq!(
        store.select(|state| state.user_details.user.name.clone()),
        Some("Ann B".to_string())
    );

    store.dispatch(Action::UserUpdateProfileReset);
    assert!(!store.select(|state| state.user_update_profile.success));
}

#[tokio::test]
async fn test_update_profile_without_session() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    let update = ProfileUpdate {
        name: Some("Nobody".to_string()),
        email: None,
        password: None,
    };
    actions::update_user_profile(&store, &update).await;

    let updated = store.select(|state| state.user_update_profile.clone());
    assert!(!updated.success);
    assert_eq!(
        updated.error.as_deref(),
        Some("Authentication credentials were not provided.")
    );
    assert_eq!(mirror.get(keys::USER_INFO).unwrap(), None);
}
