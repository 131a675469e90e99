//! Shopfront client-side storefront state.
//!
//! # Architecture
//!
//! - [`api::ApiClient`] talks to the storefront REST backend
//! - [`actions`] orchestrate backend calls and dispatch [`action::Action`]s
//! - [`reducers`] fold actions into the slices of [`state::AppState`]
//! - [`store::Store`] owns the tree and notifies subscribers on every commit
//! - [`persistence`] mirrors the cart and session into a [`storage`] backend
//!   and hydrates them on startup
//!
//! # Example
//!
//! ```rust,ignore
//! let config = ClientConfig::from_env()?;
//! let store = Store::open(&config)?;
//!
//! actions::list_products(&store, &ProductQuery::keyword("phone")).await;
//! let products = store.select(|state| state.product_list.products.clone());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod persistence;
pub mod reducers;
pub mod state;
pub mod storage;
pub mod store;

pub use action::Action;
pub use api::{ApiClient, ApiError, Credentials, ProductQuery, ProfileUpdate, Registration};
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, Result};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{Store, StoreBuilder, Subscriber};
