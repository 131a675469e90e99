use shopfront_core::{NewOrder, OrderId, PaymentResult};
use shopfront_storefront::{Store, actions};

use super::{CommandError, report};

/// Place an order for the cart using the saved address and payment method.
pub async fn place(store: &Store) -> Result<(), CommandError> {
    let order = store.select(|state| {
        let cart = &state.cart;
        if cart.cart_items.is_empty() {
            return Err(CommandError::EmptyCart);
        }
        if cart.shipping_address.is_empty() {
            return Err(CommandError::MissingCheckoutStep(
                "shipping address",
                "shipping",
            ));
        }
        let method = cart
            .payment_method
            .as_deref()
            .ok_or(CommandError::MissingCheckoutStep("payment method", "payment"))?;

        Ok(NewOrder::from_cart(
            &cart.cart_items,
            &cart.shipping_address,
            method,
        ))
    })?;

    actions::create_order(store, &order).await;

    let slice = store.select(|state| state.order_create.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn show(store: &Store, id: i32) -> Result<(), CommandError> {
    actions::get_order_details(store, OrderId::new(id)).await;

    let slice = store.select(|state| state.order_details.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn mine(store: &Store) -> Result<(), CommandError> {
    actions::list_my_orders(store).await;

    let slice = store.select(|state| state.order_list_my.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn pay(
    store: &Store,
    id: i32,
    transaction_id: Option<String>,
    payer_email: Option<String>,
) -> Result<(), CommandError> {
    let payment = PaymentResult {
        id: transaction_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        status: "COMPLETED".to_string(),
        update_time: None,
        email_address: payer_email,
    };
    actions::pay_order(store, OrderId::new(id), &payment).await;

    let slice = store.select(|state| state.order_pay.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn deliver(store: &Store, id: i32) -> Result<(), CommandError> {
    actions::deliver_order(store, OrderId::new(id)).await;

    let slice = store.select(|state| state.order_deliver.clone());
    report(&slice, slice.error.as_ref())
}
