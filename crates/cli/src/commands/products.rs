use shopfront_core::{NewReview, ProductId};
use shopfront_storefront::{ProductQuery, Store, actions};

use super::{CommandError, report};

pub async fn list(
    store: &Store,
    keyword: Option<String>,
    page: Option<u32>,
) -> Result<(), CommandError> {
    actions::list_products(store, &ProductQuery { keyword, page }).await;

    let slice = store.select(|state| state.product_list.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn show(store: &Store, id: i32) -> Result<(), CommandError> {
    actions::list_product_details(store, ProductId::new(id)).await;

    let slice = store.select(|state| state.product_details.clone());
    report(&slice, slice.error.as_ref())
}

pub async fn review(
    store: &Store,
    id: i32,
    rating: u8,
    comment: String,
) -> Result<(), CommandError> {
    let review = NewReview { rating, comment };
    actions::create_product_review(store, ProductId::new(id), &review).await;

    let slice = store.select(|state| state.product_review_create.clone());
    report(&slice, slice.error.as_ref())
}
