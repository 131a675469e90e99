//! Order records and the checkout request body.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::cart::{CartLine, ShippingAddress};
use super::id::{OrderId, OrderItemId, ProductId};
use super::price::PriceBreakdown;
use super::user::UserProfile;

/// An order as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub tax_price: Option<Decimal>,
    #[serde(default)]
    pub shipping_price: Option<Decimal>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_delivered: bool,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    /// `None` when the backend has no address on file (it sends `false`).
    #[serde(default, deserialize_with = "address_or_false")]
    pub shipping_address: Option<ShippingAddress>,
}

/// A line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: OrderItemId,
    #[serde(default)]
    pub product: Option<ProductId>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub qty: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image: String,
}

/// Body of an order creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_items: Vec<CartLine>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
}

impl NewOrder {
    /// Build an order from cart contents, pricing it with [`PriceBreakdown`].
    #[must_use]
    pub fn from_cart(
        lines: &[CartLine],
        shipping_address: &ShippingAddress,
        payment_method: &str,
    ) -> Self {
        let prices = PriceBreakdown::for_lines(lines);
        Self {
            order_items: lines.to_vec(),
            shipping_address: shipping_address.clone(),
            payment_method: payment_method.to_string(),
            items_price: prices.items,
            shipping_price: prices.shipping,
            tax_price: prices.tax,
            total_price: prices.total,
        }
    }
}

/// Payment confirmation forwarded from the payment provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

fn address_or_false<'de, D>(deserializer: D) -> Result<Option<ShippingAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AddressField {
        Address(ShippingAddress),
        Flag(bool),
        Missing(()),
    }

    Ok(match AddressField::deserialize(deserializer)? {
        AddressField::Address(address) => Some(address),
        AddressField::Flag(_) | AddressField::Missing(()) => None,
    })
}
