//! Shopfront Core - Shared types library.
//!
//! This crate provides the data records used across all Shopfront components:
//! - `storefront` - Client state layer (API client, actions, reducers, store)
//! - `cli` - Command-line front end
//! - `integration-tests` - Mock backend and end-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types and static data - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, catalog/cart/order/user records, checkout pricing
//! - [`catalog`] - Static seed catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
