//! Account commands.
//!
//! Passwords are wrapped in [`SecretString`] as soon as they are parsed.

use secrecy::SecretString;
use shopfront_storefront::{Credentials, ProfileUpdate, Registration, Store, actions};

use super::{CommandError, print_json, report};

pub async fn login(store: &Store, email: String, password: String) -> Result<(), CommandError> {
    let credentials = Credentials {
        email,
        password: SecretString::from(password),
    };
    actions::login(store, &credentials).await;

    let slice = store.select(|state| state.user_login.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn register(
    store: &Store,
    name: String,
    email: String,
    password: String,
) -> Result<(), CommandError> {
    let registration = Registration {
        name,
        email,
        password: SecretString::from(password),
    };
    actions::register(store, &registration).await;

    let slice = store.select(|state| state.user_register.clone());
    report(&slice, slice.error.as_ref())
}

pub fn logout(store: &Store) -> Result<(), CommandError> {
    actions::logout(store);
    print_json(&store.select(|state| state.user_login.clone()))
}

pub async fn profile(store: &Store) -> Result<(), CommandError> {
    actions::get_user_details(store, "profile").await;

    let slice = store.select(|state| state.user_details.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn update(
    store: &Store,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), CommandError> {
    let update = ProfileUpdate {
        name,
        email,
        password: password.map(SecretString::from),
    };
    actions::update_user_profile(store, &update).await;

    let slice = store.select(|state| state.user_update_profile.clone());
    report(&slice, slice.error.as_ref())
}
