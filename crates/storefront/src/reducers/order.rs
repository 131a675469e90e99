//! Order slices: creation, detail, payment, delivery and the caller's
//! order history.

use serde::Serialize;
use shopfront_core::Order;

use super::{RequestState, is_false};
use crate::action::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderCreateState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The order being viewed. Starts out loading: there is nothing to show
/// until the first fetch completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailsState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for OrderDetailsState {
    fn default() -> Self {
        Self {
            loading: true,
            order: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderListMyState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    pub orders: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[must_use]
pub fn order_create(state: OrderCreateState, action: &Action) -> OrderCreateState {
    match action {
        Action::OrderCreateRequest => OrderCreateState {
            loading: true,
            ..OrderCreateState::default()
        },
        Action::OrderCreateSuccess(order) => OrderCreateState {
            success: true,
            order: Some(order.clone()),
            ..OrderCreateState::default()
        },
        Action::OrderCreateFail(message) => OrderCreateState {
            error: Some(message.clone()),
            ..OrderCreateState::default()
        },
        Action::OrderCreateReset => OrderCreateState::default(),
        _ => state,
    }
}

#[must_use]
pub fn order_details(state: OrderDetailsState, action: &Action) -> OrderDetailsState {
    match action {
        Action::OrderDetailsRequest => OrderDetailsState {
            loading: true,
            ..state
        },
        Action::OrderDetailsSuccess(order) => OrderDetailsState {
            loading: false,
            order: Some(order.clone()),
            error: None,
        },
        Action::OrderDetailsFail(message) => OrderDetailsState {
            loading: false,
            order: None,
            error: Some(message.clone()),
        },
        _ => state,
    }
}

#[must_use]
pub fn order_pay(state: RequestState, action: &Action) -> RequestState {
    match action {
        Action::OrderPayRequest => RequestState::loading(),
        Action::OrderPaySuccess => RequestState::succeeded(),
        Action::OrderPayFail(message) => RequestState::failed(message),
        Action::OrderPayReset => RequestState::default(),
        _ => state,
    }
}

#[must_use]
pub fn order_deliver(state: RequestState, action: &Action) -> RequestState {
    match action {
        Action::OrderDeliverRequest => RequestState::loading(),
        Action::OrderDeliverSuccess => RequestState::succeeded(),
        Action::OrderDeliverFail(message) => RequestState::failed(message),
        Action::OrderDeliverReset => RequestState::default(),
        _ => state,
    }
}

#[must_use]
pub fn order_list_my(state: OrderListMyState, action: &Action) -> OrderListMyState {
    match action {
        Action::OrderListMyRequest => OrderListMyState {
            loading: true,
            ..OrderListMyState::default()
        },
        Action::OrderListMySuccess(orders) => OrderListMyState {
            orders: orders.clone(),
            ..OrderListMyState::default()
        },
        Action::OrderListMyFail(message) => OrderListMyState {
            error: Some(message.clone()),
            ..OrderListMyState::default()
        },
        Action::OrderListMyReset => OrderListMyState::default(),
        _ => state,
    }
}
