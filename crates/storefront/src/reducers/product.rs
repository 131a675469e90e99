//! Product listing, product detail and review-creation slices.

use serde::Serialize;
use shopfront_core::Product;

use super::{RequestState, is_false};
use crate::action::Action;

/// One page of the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductListState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The product being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductDetailsState {
    #[serde(skip_serializing_if = "is_false")]
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[must_use]
pub fn product_list(state: ProductListState, action: &Action) -> ProductListState {
    match action {
        Action::ProductListRequest => ProductListState {
            loading: true,
            ..ProductListState::default()
        },
        Action::ProductListSuccess(page) => ProductListState {
            products: page.products.clone(),
            page: Some(page.page),
            pages: Some(page.pages),
            ..ProductListState::default()
        },
        Action::ProductListFail(message) => ProductListState {
            error: Some(message.clone()),
            ..ProductListState::default()
        },
        _ => state,
    }
}

/// Product detail reducer. A new request keeps the previously shown product
/// until the response arrives.
#[must_use]
pub fn product_details(state: ProductDetailsState, action: &Action) -> ProductDetailsState {
    match action {
        Action::ProductDetailsRequest => ProductDetailsState {
            loading: true,
            ..state
        },
        Action::ProductDetailsSuccess(product) => ProductDetailsState {
            product: Some(product.clone()),
            ..ProductDetailsState::default()
        },
        Action::ProductDetailsFail(message) => ProductDetailsState {
            error: Some(message.clone()),
            ..ProductDetailsState::default()
        },
        _ => state,
    }
}

#[must_use]
pub fn product_review_create(state: RequestState, action: &Action) -> RequestState {
    match action {
        Action::ProductCreateReviewRequest => RequestState::loading(),
        Action::ProductCreateReviewSuccess => RequestState::succeeded(),
        Action::ProductCreateReviewFail(message) => RequestState::failed(message),
        Action::ProductCreateReviewReset => RequestState::default(),
        _ => state,
    }
}
