//! Product and review records as served by the catalog endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, ReviewId, UserId};

/// A product in the catalog.
///
/// Read-only on the client. Reviews are appended server-side and only show
/// up after the product is fetched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Image path or URL.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count_in_stock: i32,
    /// Average rating on a 0-5 scale.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rating: Decimal,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub num_reviews: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Whether at least one unit can be ordered.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.count_in_stock > 0
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    #[serde(default)]
    pub product: Option<ProductId>,
    #[serde(default)]
    pub user: Option<UserId>,
    /// Display name of the reviewer.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rating: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub pages: u32,
}

/// Body of a review submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Star rating, 1-5.
    pub rating: u8,
    pub comment: String,
}
