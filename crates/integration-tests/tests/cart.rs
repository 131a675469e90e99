//! Integration tests for the cart and its persistent mirror.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shopfront_core::{CartLine, ProductId, ShippingAddress};
use shopfront_integration_tests::MockBackend;
use shopfront_storefront::storage::{keys, read_json};
use shopfront_storefront::{KeyValueStore, MemoryStore, actions};

fn address() -> ShippingAddress {
    ShippingAddress {
        address: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        postal_code: Some("12345".to_string()),
        country: Some("US".to_string()),
    }
}

#[tokio::test]
async fn test_add_fetches_product_and_mirrors_cart() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    actions::add_to_cart(&store, ProductId::new(1), 2).await.unwrap();

    let request = backend.last_request().unwrap();
    assert_eq!(request.path, "/api/products/1");
    assert_eq!(request.authorization, None);

    let items = store.select(|state| state.cart.cart_items.clone());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Airpods Wireless Bluetooth Headphones");
    assert_eq!(items[0].price, Decimal::new(8999, 2));
    assert_eq!(items[0].count_in_stock, 10);
    assert_eq!(items[0].qty, 2);

    let mirrored: Vec<CartLine> = read_json(&mirror, keys::CART_ITEMS).unwrap().unwrap();
    assert_eq!(mirrored, items);
}

#[tokio::test]
async fn test_adding_same_product_replaces_quantity() {
    let backend = MockBackend::start().await;
    let (store, _mirror) = backend.store();

    actions::add_to_cart(&store, ProductId::new(1), 1).await.unwrap();
    actions::add_to_cart(&store, ProductId::new(5), 1).await.unwrap();
    actions::add_to_cart(&store, ProductId::new(1), 3).await.unwrap();

    let cart = store.select(|state| state.cart.clone());
    let quantities: Vec<(i32, u32)> = cart
        .cart_items
        .iter()
        .map(|line| (line.product.as_i32(), line.qty))
        .collect();
    assert_eq!(quantities, vec![(1, 3), (5, 1)]);
    assert_eq!(cart.item_count(), 4);

    let prices = cart.prices();
    assert_eq!(prices.items, Decimal::new(31996, 2));
    assert_eq!(prices.shipping, Decimal::ZERO);
}

#[tokio::test]
async fn test_add_missing_product_leaves_cart_untouched() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    let err = actions::add_to_cart(&store, ProductId::new(99), 1)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Product not found");
    assert!(store.select(|state| state.cart.cart_items.is_empty()));
    assert_eq!(mirror.get(keys::CART_ITEMS).unwrap(), None);
}

#[tokio::test]
async fn test_remove_updates_mirror() {
    let backend = MockBackend::start().await;
    let (store, mirror) = backend.store();

    actions::add_to_cart(&store, ProductId::new(2), 1).await.unwrap();
    actions::add_to_cart(&store, ProductId::new(3), 1).await.unwrap();
    actions::remove_from_cart(&store, ProductId::new(2));

    let mirrored: Vec<CartLine> = read_json(&mirror, keys::CART_ITEMS).unwrap().unwrap();
    assert_eq!(mirrored.len(), 1);
    assert_eq!(mirrored[0].product, ProductId::new(3));

    // Removing something that is not in the cart is a no-op
    actions::remove_from_cart(&store, ProductId::new(42));
    assert_eq!(store.select(|state| state.cart.cart_items.len()), 1);
}

#[tokio::test]
async fn test_checkout_steps_survive_restart() {
    let backend = MockBackend::start().await;
    let mirror = MemoryStore::new();

    {
        let store = backend.store_with_mirror(&mirror);
        actions::add_to_cart(&store, ProductId::new(4), 2).await.unwrap();
        actions::save_shipping_address(&store, address());
        actions::save_payment_method(&store, "PayPal");
    }

    assert_eq!(
        mirror.get(keys::PAYMENT_METHOD).unwrap().as_deref(),
        Some(r#""PayPal""#)
    );

    let restarted = backend.store_with_mirror(&mirror);
    let cart = restarted.select(|state| state.cart.clone());
    assert_eq!(cart.cart_items.len(), 1);
    assert_eq!(cart.cart_items[0].product, ProductId::new(4));
    assert_eq!(cart.cart_items[0].qty, 2);
    assert_eq!(cart.shipping_address, address());
    assert_eq!(cart.payment_method.as_deref(), Some("PayPal"));
}

#[tokio::test]
async fn test_corrupt_mirror_entry_is_skipped() {
    let backend = MockBackend::start().await;
    let mirror = MemoryStore::new();
    mirror.set(keys::CART_ITEMS, "not json").unwrap();
    mirror
        .set(keys::SHIPPING_ADDRESS, r#"{"city":"Springfield"}"#)
        .unwrap();

    let store = backend.store_with_mirror(&mirror);
    let cart = store.select(|state| state.cart.clone());

    assert!(cart.cart_items.is_empty());
    assert_eq!(cart.shipping_address.city.as_deref(), Some("Springfield"));
}
