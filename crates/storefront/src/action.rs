//! The closed set of state transitions.
//!
//! Request-driven flows use the `*Request` / `*Success` / `*Fail` triple;
//! `*Fail` carries the display message extracted from the failed call.
//! `*Reset` actions are dispatched directly by callers.

use shopfront_core::{
    CartLine, Order, Product, ProductId, ProductPage, ShippingAddress, UserInfo, UserProfile,
};

/// A state transition signal delivered to every reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ===== Cart =====
    CartAddItem(CartLine),
    CartRemoveItem(ProductId),
    CartSaveShippingAddress(ShippingAddress),
    CartSavePaymentMethod(String),
    CartClearItems,

    // ===== Products =====
    ProductListRequest,
    ProductListSuccess(ProductPage),
    ProductListFail(String),

    ProductDetailsRequest,
    ProductDetailsSuccess(Product),
    ProductDetailsFail(String),

    ProductCreateReviewRequest,
    ProductCreateReviewSuccess,
    ProductCreateReviewFail(String),
    ProductCreateReviewReset,

    // ===== Orders =====
    OrderCreateRequest,
    OrderCreateSuccess(Order),
    OrderCreateFail(String),
    OrderCreateReset,

    OrderDetailsRequest,
    OrderDetailsSuccess(Order),
    OrderDetailsFail(String),

    OrderPayRequest,
    OrderPaySuccess,
    OrderPayFail(String),
    OrderPayReset,

    OrderDeliverRequest,
    OrderDeliverSuccess,
    OrderDeliverFail(String),
    OrderDeliverReset,

    OrderListMyRequest,
    OrderListMySuccess(Vec<Order>),
    OrderListMyFail(String),
    OrderListMyReset,

    // ===== Users =====
    UserLoginRequest,
    UserLoginSuccess(UserInfo),
    UserLoginFail(String),
    UserLogout,

    UserRegisterRequest,
    UserRegisterSuccess(UserInfo),
    UserRegisterFail(String),

    UserDetailsRequest,
    UserDetailsSuccess(UserProfile),
    UserDetailsFail(String),
    UserDetailsReset,

    UserUpdateProfileRequest,
    UserUpdateProfileSuccess(UserInfo),
    UserUpdateProfileFail(String),
    UserUpdateProfileReset,
}

impl Action {
    /// Wire name of the action kind, e.g. `CART_ADD_ITEM`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CartAddItem(_) => "CART_ADD_ITEM",
            Self::CartRemoveItem(_) => "CART_REMOVE_ITEM",
            Self::CartSaveShippingAddress(_) => "CART_SAVE_SHIPPING_ADDRESS",
            Self::CartSavePaymentMethod(_) => "CART_SAVE_PAYMENT_METHOD",
            Self::CartClearItems => "CART_CLEAR_ITEMS",

            Self::ProductListRequest => "PRODUCT_LIST_REQUEST",
            Self::ProductListSuccess(_) => "PRODUCT_LIST_SUCCESS",
            Self::ProductListFail(_) => "PRODUCT_LIST_FAIL",
            Self::ProductDetailsRequest => "PRODUCT_DETAILS_REQUEST",
            Self::ProductDetailsSuccess(_) => "PRODUCT_DETAILS_SUCCESS",
            Self::ProductDetailsFail(_) => "PRODUCT_DETAILS_FAIL",
            Self::ProductCreateReviewRequest => "PRODUCT_CREATE_REVIEW_REQUEST",
            Self::ProductCreateReviewSuccess => "PRODUCT_CREATE_REVIEW_SUCCESS",
            Self::ProductCreateReviewFail(_) => "PRODUCT_CREATE_REVIEW_FAIL",
            Self::ProductCreateReviewReset => "PRODUCT_CREATE_REVIEW_RESET",

            Self::OrderCreateRequest => "ORDER_CREATE_REQUEST",
            Self::OrderCreateSuccess(_) => "ORDER_CREATE_SUCCESS",
            Self::OrderCreateFail(_) => "ORDER_CREATE_FAIL",
            Self::OrderCreateReset => "ORDER_CREATE_RESET",
            Self::OrderDetailsRequest => "ORDER_DETAILS_REQUEST",
            Self::OrderDetailsSuccess(_) => "ORDER_DETAILS_SUCCESS",
            Self::OrderDetailsFail(_) => "ORDER_DETAILS_FAIL",
            Self::OrderPayRequest => "ORDER_PAY_REQUEST",
            Self::OrderPaySuccess => "ORDER_PAY_SUCCESS",
            Self::OrderPayFail(_) => "ORDER_PAY_FAIL",
            Self::OrderPayReset => "ORDER_PAY_RESET",
            Self::OrderDeliverRequest => "ORDER_DELIVER_REQUEST",
            Self::OrderDeliverSuccess => "ORDER_DELIVER_SUCCESS",
            Self::OrderDeliverFail(_) => "ORDER_DELIVER_FAIL",
            Self::OrderDeliverReset => "ORDER_DELIVER_RESET",
            Self::OrderListMyRequest => "ORDER_LIST_MY_REQUEST",
            Self::OrderListMySuccess(_) => "ORDER_LIST_MY_SUCCESS",
            Self::OrderListMyFail(_) => "ORDER_LIST_MY_FAIL",
            Self::OrderListMyReset => "ORDER_LIST_MY_RESET",

            Self::UserLoginRequest => "USER_LOGIN_REQUEST",
            Self::UserLoginSuccess(_) => "USER_LOGIN_SUCCESS",
            Self::UserLoginFail(_) => "USER_LOGIN_FAIL",
            Self::UserLogout => "USER_LOGOUT",
            Self::UserRegisterRequest => "USER_REGISTER_REQUEST",
            Self::UserRegisterSuccess(_) => "USER_REGISTER_SUCCESS",
            Self::UserRegisterFail(_) => "USER_REGISTER_FAIL",
            Self::UserDetailsRequest => "USER_DETAILS_REQUEST",
            Self::UserDetailsSuccess(_) => "USER_DETAILS_SUCCESS",
            Self::UserDetailsFail(_) => "USER_DETAILS_FAIL",
            Self::UserDetailsReset => "USER_DETAILS_RESET",
            Self::UserUpdateProfileRequest => "USER_UPDATE_PROFILE_REQUEST",
            Self::UserUpdateProfileSuccess(_) => "USER_UPDATE_PROFILE_SUCCESS",
            Self::UserUpdateProfileFail(_) => "USER_UPDATE_PROFILE_FAIL",
            Self::UserUpdateProfileReset => "USER_UPDATE_PROFILE_RESET",
        }
    }

    /// Whether this action reports a failed remote call.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ProductListFail(_)
                | Self::ProductDetailsFail(_)
                | Self::ProductCreateReviewFail(_)
                | Self::OrderCreateFail(_)
                | Self::OrderDetailsFail(_)
                | Self::OrderPayFail(_)
                | Self::OrderDeliverFail(_)
                | Self::OrderListMyFail(_)
                | Self::UserLoginFail(_)
                | Self::UserRegisterFail(_)
                | Self::UserDetailsFail(_)
                | Self::UserUpdateProfileFail(_)
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Action::CartClearItems.kind(), "CART_CLEAR_ITEMS");
        assert_eq!(
            Action::CartRemoveItem(ProductId::new(3)).kind(),
            "CART_REMOVE_ITEM"
        );
        assert_eq!(Action::OrderListMyReset.to_string(), "ORDER_LIST_MY_RESET");
    }

    #[test]
    fn test_is_failure() {
        assert!(Action::UserLoginFail("Invalid".to_string()).is_failure());
        assert!(!Action::UserLogout.is_failure());
        assert!(!Action::OrderPaySuccess.is_failure());
    }
}
