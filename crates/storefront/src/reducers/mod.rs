//! Pure slice reducers.
//!
//! Each reducer takes its slice by value and returns the next slice. Actions
//! a reducer does not handle return the slice unchanged. A reset returns the
//! slice's initial value, never a merge with prior state.
//!
//! Slice states serialize to the sparse JSON shape a renderer reads:
//! `false` flags and absent values are omitted.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartState, cart};
pub use order::{
    OrderCreateState, OrderDetailsState, OrderListMyState, order_create, order_deliver,
    order_details, order_list_my, order_pay,
};
pub use product::{
    ProductDetailsState, ProductListState, product_details, product_list, product_review_create,
};
pub use user::{
    UserDetailsState, UserLoginState, UserRegisterState, UserUpdateProfileState, user_details,
    user_login, user_register, user_update_profile,
};

use serde::Serialize;

/// Status of a request-driven operation with no payload of its own:
/// review creation, order payment and order delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestState {
    /// In flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Completed successfully.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Failed with `message`.
    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
