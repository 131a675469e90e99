//! Cart slice: lines, shipping address and payment method.

use serde::Serialize;
use shopfront_core::{CartLine, PriceBreakdown, ShippingAddress};

use crate::action::Action;

/// Cart contents and checkout choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Lines in insertion order; at most one per product.
    pub cart_items: Vec<CartLine>,
    pub shipping_address: ShippingAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl CartState {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart_items.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Checkout prices for the current lines.
    #[must_use]
    pub fn prices(&self) -> PriceBreakdown {
        PriceBreakdown::for_lines(&self.cart_items)
    }
}

/// Cart reducer.
///
/// Adding a product that is already in the cart replaces its line in place:
/// the new quantity overwrites the old one.
#[must_use]
pub fn cart(mut state: CartState, action: &Action) -> CartState {
    match action {
        Action::CartAddItem(item) => {
            match state
                .cart_items
                .iter_mut()
                .find(|line| line.product == item.product)
            {
                Some(existing) => *existing = item.clone(),
                None => state.cart_items.push(item.clone()),
            }
            state
        }
        Action::CartRemoveItem(product) => {
            state.cart_items.retain(|line| line.product != *product);
            state
        }
        Action::CartSaveShippingAddress(address) => {
            state.shipping_address = address.clone();
            state
        }
        Action::CartSavePaymentMethod(method) => {
            state.payment_method = Some(method.clone());
            state
        }
        Action::CartClearItems => {
            state.cart_items.clear();
            state
        }
        _ => state,
    }
}
