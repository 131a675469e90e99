//! Core types for Shopfront.
//!
//! This module provides type-safe IDs and the plain data records exchanged
//! with the storefront backend.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod user;

pub use cart::{CartLine, ShippingAddress};
pub use id::*;
pub use order::{NewOrder, Order, OrderItem, PaymentResult};
pub use price::{PriceBreakdown, round_money};
pub use product::{NewReview, Product, ProductPage, Review};
pub use user::{UserInfo, UserProfile};

/// Deserialize a nullable column, mapping JSON `null` to the type's default.
///
/// Pair with `#[serde(default)]` to also cover a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
