//! Cart line and shipping address records.
//!
//! Both are persisted verbatim in the client mirror, so their JSON shape
//! is part of the storage format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A cart line: a snapshot of a product taken when it was added.
///
/// The snapshot is never refreshed; price and stock reflect the product at
/// add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// ID of the product this line refers to. Unique within a cart.
    pub product: ProductId,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub count_in_stock: i32,
    pub qty: u32,
}

impl CartLine {
    /// Snapshot `product` with the requested quantity.
    #[must_use]
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            product: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            count_in_stock: product.count_in_stock,
            qty,
        }
    }

    /// Price of the line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Shipping address entered at checkout.
///
/// Every field is optional; the default value is the empty address `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ShippingAddress {
    /// Whether no field has been filled in.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line_storage_shape() {
        let line = CartLine {
            product: ProductId::new(1),
            name: "Airpods".to_string(),
            image: "/images/airpods.jpg".to_string(),
            price: Decimal::new(8999, 2),
            count_in_stock: 10,
            qty: 2,
        };

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["product"], 1);
        assert_eq!(json["countInStock"], 10);
        assert_eq!(json["qty"], 2);
        assert_eq!(line.line_total(), Decimal::new(17998, 2));
    }

    #[test]
    fn test_empty_address_serializes_as_empty_object() {
        let address = ShippingAddress::default();
        assert!(address.is_empty());
        assert_eq!(serde_json::to_string(&address).unwrap(), "{}");
    }

    #[test]
    fn test_address_ignores_backend_extras() {
        let address: ShippingAddress = serde_json::from_str(
            r#"{"_id":3,"order":9,"address":"1 Main St","city":"Springfield","postalCode":"12345","country":"US","shippingPrice":"10.00"}"#,
        )
        .unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("12345"));
        assert!(!address.is_empty());
    }
}
