use shopfront_core::{NewReview, ProductId};
use tracing::instrument;

use crate::action::Action;
use crate::api::ProductQuery;
use crate::store::Store;

/// Load one page of the product listing.
#[instrument(skip(store))]
pub async fn list_products(store: &Store, query: &ProductQuery) {
    store.dispatch(Action::ProductListRequest);

    match store.api().list_products(query).await {
        Ok(page) => store.dispatch(Action::ProductListSuccess(page)),
        Err(e) => store.dispatch(Action::ProductListFail(e.message())),
    }
}

/// Load a product with its reviews.
#[instrument(skip(store))]
pub async fn list_product_details(store: &Store, id: ProductId) {
    store.dispatch(Action::ProductDetailsRequest);

    match store.api().get_product(id).await {
        Ok(product) => store.dispatch(Action::ProductDetailsSuccess(product)),
        Err(e) => store.dispatch(Action::ProductDetailsFail(e.message())),
    }
}

/// Post a review as the signed-in user. The backend's reply is not kept;
/// reload the product to see the review.
#[instrument(skip(store, review), fields(rating = review.rating))]
pub async fn create_product_review(store: &Store, id: ProductId, review: &NewReview) {
    store.dispatch(Action::ProductCreateReviewRequest);

    let token = store.token();
    match store.api().create_review(token.as_deref(), id, review).await {
        Ok(_) => store.dispatch(Action::ProductCreateReviewSuccess),
        Err(e) => store.dispatch(Action::ProductCreateReviewFail(e.message())),
    }
}
