//! Integration tests for checkout, payment, delivery and order history.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use secrecy::SecretString;
use shopfront_core::{NewOrder, Order, OrderId, PaymentResult, ProductId, ShippingAddress};
use shopfront_integration_tests::{
    ADMIN_EMAIL, ADMIN_PASSWORD, CUSTOMER_EMAIL, CUSTOMER_PASSWORD, MockBackend,
};
use shopfront_storefront::reducers::{OrderCreateState, RequestState};
use shopfront_storefront::storage::keys;
use shopfront_storefront::{
    Action, Credentials, KeyValueStore, MemoryStore, Registration, Store, actions,
};

async fn sign_in(store: &Store, email: &str, password: &str) {
    let credentials = Credentials {
        email: email.to_string(),
        password: SecretString::from(password),
    };
    actions::login(store, &credentials).await;
    assert!(store.token().is_some(), "login as {email} failed");
}

/// Fill the cart and run the checkout steps.
async fn ready_cart(store: &Store) {
    actions::add_to_cart(store, ProductId::new(1), 1).await.unwrap();
    actions::add_to_cart(store, ProductId::new(5), 2).await.unwrap();
    actions::save_shipping_address(
        store,
        ShippingAddress {
            address: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            postal_code: Some("12345".to_string()),
            country: Some("US".to_string()),
        },
    );
    actions::save_payment_method(store, "PayPal");
}

fn order_from_cart(store: &Store) -> NewOrder {
    store.select(|state| {
        NewOrder::from_cart(
            &state.cart.cart_items,
            &state.cart.shipping_address,
            state.cart.payment_method.as_deref().unwrap_or_default(),
        )
    })
}

/// Sign in as the customer and place an order; returns the created order.
async fn place_order(backend: &MockBackend) -> (Store, MemoryStore, Order) {
    let (store, mirror) = backend.store();
    sign_in(&store, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;
    ready_cart(&store).await;

    actions::create_order(&store, &order_from_cart(&store)).await;
    let order = store
        .select(|state| state.order_create.order.clone())
        .unwrap();
    (store, mirror, order)
}

fn payment() -> PaymentResult {
    PaymentResult {
        id: "PAY-1".to_string(),
        status: "COMPLETED".to_string(),
        update_time: None,
        email_address: Some(CUSTOMER_EMAIL.to_string()),
    }
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_create_order_clears_cart() {
    let backend = MockBackend::start().await;
    let (store, mirror, order) = place_order(&backend).await;

    let created = store.select(|state| state.order_create.clone());
    assert!(created.success);
    assert!(!created.loading);
    assert_eq!(created.error, None);

    assert_eq!(order.order_items.len(), 2);
    assert_eq!(order.payment_method.as_deref(), Some("PayPal"));
    assert!(!order.is_paid);

    let request = backend.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/orders/add/");

    let cart = store.select(|state| state.cart.clone());
    assert!(cart.cart_items.is_empty());
    assert_eq!(mirror.get(keys::CART_ITEMS).unwrap(), None);

    // Address and payment method outlive the order
    assert!(!cart.shipping_address.is_empty());
    assert!(mirror.get(keys::SHIPPING_ADDRESS).unwrap().is_some());
    assert_eq!(cart.payment_method.as_deref(), Some("PayPal"));
}

#[tokio::test]
async fn test_create_order_without_session_keeps_cart() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();
    ready_cart(&store).await;

    actions::create_order(&store, &order_from_cart(&store)).await;

    let created = store.select(|state| state.order_create.clone());
    assert!(!created.success);
    assert_eq!(
        created.error.as_deref(),
        Some("Authentication credentials were not provided.")
    );
    assert_eq!(backend.last_request().unwrap().authorization, None);
    assert_eq!(store.select(|state| state.cart.cart_items.len()), 2);
    assert!(mirror.get(keys::CART_ITEMS).unwrap().is_some());
}

#[tokio::test]
async fn test_create_order_rejects_empty_order() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();
    sign_in(&store, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;

    let empty = NewOrder::from_cart(&[], &ShippingAddress::default(), "PayPal");
    actions::create_order(&store, &empty).await;

    assert_eq!(
        store.select(|state| state.order_create.error.clone()),
        Some("No Order Items".to_string())
    );

    store.dispatch(Action::OrderCreateReset);
    assert_eq!(
        store.select(|state| state.order_create.clone()),
        OrderCreateState::default()
    );
}

// ============================================================================
// Order Details
// ============================================================================

#[tokio::test]
async fn test_order_details_for_owner() {
    let backend = MockBackend::start().await;
    let (store, _mirror, order) = place_order(&backend).await;

    actions::get_order_details(&store, order.id).await;

    let details = store.select(|state| state.order_details.clone());
    assert!(!details.loading);
    assert_eq!(details.order, Some(order));
}

#[tokio::test]
async fn test_order_details_for_other_customer_is_rejected() {
    let backend = MockBackend::start().await;
    let (_owner, _mirror, order) = place_order(&backend).await;

    let (stranger, _) = backend.store();
    actions::register(
        &stranger,
        &Registration {
            name: "Bob".to_string(),
            email: "bob@shopfront.test".to_string(),
            password: SecretString::from("bob-pass"),
        },
    )
    .await;

    actions::get_order_details(&stranger, order.id).await;
    assert_eq!(
        stranger.select(|state| state.order_details.error.clone()),
        Some("Not authorized to view this order".to_string())
    );

    let (admin, _) = backend.store();
    sign_in(&admin, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    actions::get_order_details(&admin, order.id).await;
    assert_eq!(
        admin.select(|state| state.order_details.order.as_ref().map(|o| o.id)),
        Some(order.id)
    );
}

#[tokio::test]
async fn test_missing_order() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();
    sign_in(&store, CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await;

    actions::get_order_details(&store, OrderId::new(9999)).await;

    let details = store.select(|state| state.order_details.clone());
    assert!(!details.loading);
    assert_eq!(details.error.as_deref(), Some("Order does not exist"));
}

// ============================================================================
// Payment and Delivery
// ============================================================================

#[tokio::test]
async fn test_pay_order() {
    let backend = MockBackend::start().await;
    let (store, _mirror, order) = place_order(&backend).await;

    actions::pay_order(&store, order.id, &payment()).await;

    assert_eq!(
        store.select(|state| state.order_pay.clone()),
        RequestState::succeeded()
    );
    let request = backend.last_request().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, format!("/api/orders/{}/pay/", order.id));
    assert!(backend.order(order.id).unwrap().is_paid);

    store.dispatch(Action::OrderPayReset);
    assert_eq!(
        store.select(|state| state.order_pay.clone()),
        RequestState::default()
    );
}

#[tokio::test]
async fn test_deliver_requires_staff() {
    let backend = MockBackend::start().await;
    let (customer, _mirror, order) = place_order(&backend).await;

    actions::deliver_order(&customer, order.id).await;
    assert_eq!(
        customer.select(|state| state.order_deliver.clone()),
        RequestState::failed("You do not have permission to perform this action.")
    );
    assert!(!backend.order(order.id).unwrap().is_delivered);

    let (admin, _) = backend.store();
    sign_in(&admin, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    actions::deliver_order(&admin, order.id).await;

    assert_eq!(
        admin.select(|state| state.order_deliver.clone()),
        RequestState::succeeded()
    );
    let delivered = backend.order(order.id).unwrap();
    assert!(delivered.is_delivered);
    assert!(delivered.delivered_at.is_some());
}

#[tokio::test]
async fn test_backend_failure_during_payment() {
    let backend = MockBackend::start().await;
    let (store, _mirror, order) = place_order(&backend).await;

    backend.fail_next(StatusCode::BAD_GATEWAY);
    actions::pay_order(&store, order.id, &payment()).await;

    assert_eq!(
        store.select(|state| state.order_pay.clone()),
        RequestState::failed("Request failed with status code 502")
    );
    assert!(!backend.order(order.id).unwrap().is_paid);
}

// ============================================================================
// Order History
// ============================================================================

#[tokio::test]
async fn test_my_orders_then_logout() {
    let backend = MockBackend::start().await;
    let (store, _mirror, order) = place_order(&backend).await;

    actions::list_my_orders(&store).await;
    let mine = store.select(|state| state.order_list_my.clone());
    assert!(!mine.loading);
    assert_eq!(mine.orders.len(), 1);
    assert_eq!(mine.orders[0].id, order.id);

    actions::logout(&store);
    let mine = store.select(|state| state.order_list_my.clone());
    assert!(mine.orders.is_empty());
    assert_eq!(mine.error, None);
}

#[tokio::test]
async fn test_my_orders_without_session() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();

    actions::list_my_orders(&store).await;

    let mine = store.select(|state| state.order_list_my.clone());
    assert!(mine.orders.is_empty());
    assert_eq!(
        mine.error.as_deref(),
        Some("Authentication credentials were not provided.")
    );
}
