//! Root state tree.

use serde::Serialize;

use crate::action::Action;
use crate::reducers::{
    self, CartState, OrderCreateState, OrderDetailsState, OrderListMyState, ProductDetailsState,
    ProductListState, RequestState, UserDetailsState, UserLoginState, UserRegisterState,
    UserUpdateProfileState,
};

/// Every slice of client state, keyed the way a renderer reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub product_list: ProductListState,
    pub product_details: ProductDetailsState,
    pub product_review_create: RequestState,
    pub cart: CartState,
    pub user_login: UserLoginState,
    pub user_register: UserRegisterState,
    pub user_details: UserDetailsState,
    pub user_update_profile: UserUpdateProfileState,
    pub order_create: OrderCreateState,
    pub order_details: OrderDetailsState,
    pub order_pay: RequestState,
    pub order_deliver: RequestState,
    pub order_list_my: OrderListMyState,
}

impl AppState {
    /// Bearer token of the signed-in user, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user_login.token()
    }
}

/// Root reducer: hands the action to every slice reducer.
#[must_use]
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        product_list: reducers::product_list(state.product_list, action),
        product_details: reducers::product_details(state.product_details, action),
        product_review_create: reducers::product_review_create(
            state.product_review_create,
            action,
        ),
        cart: reducers::cart(state.cart, action),
        user_login: reducers::user_login(state.user_login, action),
        user_register: reducers::user_register(state.user_register, action),
        user_details: reducers::user_details(state.user_details, action),
        user_update_profile: reducers::user_update_profile(state.user_update_profile, action),
        order_create: reducers::order_create(state.order_create, action),
        order_details: reducers::order_details(state.order_details, action),
        order_pay: reducers::order_pay(state.order_pay, action),
        order_deliver: reducers::order_deliver(state.order_deliver, action),
        order_list_my: reducers::order_list_my(state.order_list_my, action),
    }
}
