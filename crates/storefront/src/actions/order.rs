use shopfront_core::{NewOrder, OrderId, PaymentResult};
use tracing::{info, instrument};

use crate::action::Action;
use crate::store::Store;

/// Place an order. On success the cart is emptied.
#[instrument(skip(store, order), fields(lines = order.order_items.len(), total = %order.total_price))]
pub async fn create_order(store: &Store, order: &NewOrder) {
    store.dispatch(Action::OrderCreateRequest);

    let token = store.token();
    match store.api().create_order(token.as_deref(), order).await {
        Ok(created) => {
            info!(order_id = %created.id, "Order placed");
            store.dispatch(Action::OrderCreateSuccess(created));
            store.dispatch(Action::CartClearItems);
        }
        Err(e) => store.dispatch(Action::OrderCreateFail(e.message())),
    }
}

#[instrument(skip(store))]
pub async fn get_order_details(store: &Store, id: OrderId) {
    store.dispatch(Action::OrderDetailsRequest);

    let token = store.token();
    match store.api().get_order(token.as_deref(), id).await {
        Ok(order) => store.dispatch(Action::OrderDetailsSuccess(order)),
        Err(e) => store.dispatch(Action::OrderDetailsFail(e.message())),
    }
}

/// Record a payment for an order.
#[instrument(skip(store, payment))]
pub async fn pay_order(store: &Store, id: OrderId, payment: &PaymentResult) {
    store.dispatch(Action::OrderPayRequest);

    let token = store.token();
    match store.api().pay_order(token.as_deref(), id, payment).await {
        Ok(_) => store.dispatch(Action::OrderPaySuccess),
        Err(e) => store.dispatch(Action::OrderPayFail(e.message())),
    }
}

/// Mark an order delivered. Requires a staff session.
#[instrument(skip(store))]
pub async fn deliver_order(store: &Store, id: OrderId) {
    store.dispatch(Action::OrderDeliverRequest);

    let token = store.token();
    match store.api().deliver_order(token.as_deref(), id).await {
        Ok(_) => store.dispatch(Action::OrderDeliverSuccess),
        Err(e) => store.dispatch(Action::OrderDeliverFail(e.message())),
    }
}

#[instrument(skip(store))]
pub async fn list_my_orders(store: &Store) {
    store.dispatch(Action::OrderListMyRequest);

    let token = store.token();
    match store.api().my_orders(token.as_deref()).await {
        Ok(orders) => store.dispatch(Action::OrderListMySuccess(orders)),
        Err(e) => store.dispatch(Action::OrderListMyFail(e.message())),
    }
}
