//! Session and account action creators.
//!
//! Login, registration and profile updates all finish by dispatching
//! `USER_LOGIN_SUCCESS` with the returned session, which is what gets
//! mirrored to storage.

use tracing::{info, instrument};

use crate::action::Action;
use crate::api::{Credentials, ProfileUpdate, Registration};
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::store::Store;

#[instrument(skip(store, credentials), fields(email = %credentials.email))]
pub async fn login(store: &Store, credentials: &Credentials) {
    store.dispatch(Action::UserLoginRequest);

    match store.api().login(credentials).await {
        Ok(session) => {
            set_sentry_user(&session);
            info!("Signed in");
            store.dispatch(Action::UserLoginSuccess(session));
        }
        Err(e) => store.dispatch(Action::UserLoginFail(e.message())),
    }
}

/// End the session and forget everything loaded for it.
pub fn logout(store: &Store) {
    store.dispatch(Action::UserLogout);
    store.dispatch(Action::UserDetailsReset);
    store.dispatch(Action::OrderListMyReset);
    clear_sentry_user();
}

/// Create an account and sign in as it.
#[instrument(skip(store, registration), fields(email = %registration.email))]
pub async fn register(store: &Store, registration: &Registration) {
    store.dispatch(Action::UserRegisterRequest);

    match store.api().register(registration).await {
        Ok(session) => {
            set_sentry_user(&session);
            info!("Registered");
            store.dispatch(Action::UserRegisterSuccess(session.clone()));
            store.dispatch(Action::UserLoginSuccess(session));
        }
        Err(e) => store.dispatch(Action::UserRegisterFail(e.message())),
    }
}

/// Load a user profile; `id` is a user ID or `profile` for the caller.
#[instrument(skip(store))]
pub async fn get_user_details(store: &Store, id: &str) {
    store.dispatch(Action::UserDetailsRequest);

    let token = store.token();
    match store.api().get_user(token.as_deref(), id).await {
        Ok(user) => store.dispatch(Action::UserDetailsSuccess(user)),
        Err(e) => store.dispatch(Action::UserDetailsFail(e.message())),
    }
}

/// Update the caller's profile. The refreshed session replaces the current
/// one.
#[instrument(skip(store, update))]
pub async fn update_user_profile(store: &Store, update: &ProfileUpdate) {
    store.dispatch(Action::UserUpdateProfileRequest);

    let token = store.token();
    match store.api().update_profile(token.as_deref(), update).await {
        Ok(session) => {
            store.dispatch(Action::UserUpdateProfileSuccess(session.clone()));
            store.dispatch(Action::UserLoginSuccess(session));
        }
        Err(e) => store.dispatch(Action::UserUpdateProfileFail(e.message())),
    }
}
