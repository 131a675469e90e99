//! Checkout pricing using decimal arithmetic.
//!
//! Rules:
//! - items: sum of `price * qty` over the cart lines
//! - shipping: free above [`FREE_SHIPPING_THRESHOLD`], otherwise [`FLAT_SHIPPING`]
//! - tax: [`TAX_RATE`] of the items price
//!
//! Every component is rounded to cents, halves away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::cart::CartLine;

/// Items price above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Shipping charged at or below the threshold.
pub const FLAT_SHIPPING: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Sales tax rate (8.2%).
pub const TAX_RATE: Decimal = Decimal::from_parts(82, 0, 0, false, 3);

/// Price components of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub items: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Price a set of cart lines.
    #[must_use]
    pub fn for_lines(lines: &[CartLine]) -> Self {
        let items = round_money(lines.iter().map(CartLine::line_total).sum());
        let shipping = if items > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = round_money(items * TAX_RATE);

        Self {
            items,
            shipping,
            tax,
            total: round_money(items + shipping + tax),
        }
    }
}

/// Round to cents, halves away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
