//! Storefront REST client implementation.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use shopfront_core::{
    NewOrder, NewReview, Order, OrderId, PaymentResult, Product, ProductId, ProductPage, UserInfo,
    UserProfile,
};

use super::{ApiError, Credentials, ProductQuery, ProfileUpdate, Registration, extract_detail};
use crate::config::ClientConfig;

/// Client for the storefront REST API (`<origin>/api/...`).
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    /// Backend origin, always ending in `/` so relative joins append.
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the backend configured in `config`.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_url.clone())
    }

    /// Create a client for the backend at `base_url`.
    #[must_use]
    pub fn with_base_url(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve an API path (relative to `/api/`) against the origin.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join("api/")?.join(path)?)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        let request = self.inner.client.request(method, url);
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a 2xx JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first so error bodies can be inspected
        let body = response.text().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            warn!(
                status = %status,
                detail = ?detail,
                "Backend returned non-success status"
            );
            return Err(ApiError::Status { status, detail });
        }

        debug!(status = %status, bytes = body.len(), "Backend response");
        serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to decode backend response"
            );
            ApiError::Decode(e)
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, token: Option<&str>) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, url, token)).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, url, token).json(body))
            .await
    }

    async fn put<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::PUT, url, token).json(body))
            .await
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List one page of products, optionally filtered by keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let mut url = self.endpoint("products")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(keyword) = &query.keyword {
                pairs.append_pair("keyword", keyword);
            }
            if let Some(page) = query.page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        // query_pairs_mut leaves a bare `?` behind when nothing was appended
        if url.query() == Some("") {
            url.set_query(None);
        }

        self.get(url, None).await
    }

    /// Fetch a single product with its reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        self.get(url, None).await
    }

    /// Post a review for a product. The backend answers with a confirmation
    /// message, returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the review.
    #[instrument(skip(self, token, review), fields(product_id = %id))]
    pub async fn create_review(
        &self,
        token: Option<&str>,
        id: ProductId,
        review: &NewReview,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&format!("products/{id}/reviews/"))?;
        self.post(url, review, token).await
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the order.
    #[instrument(skip(self, token, order), fields(lines = order.order_items.len()))]
    pub async fn create_order(
        &self,
        token: Option<&str>,
        order: &NewOrder,
    ) -> Result<Order, ApiError> {
        let url = self.endpoint("orders/add/")?;
        self.post(url, order, token).await
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not visible to the caller or the
    /// request fails.
    #[instrument(skip(self, token), fields(order_id = %id))]
    pub async fn get_order(&self, token: Option<&str>, id: OrderId) -> Result<Order, ApiError> {
        let url = self.endpoint(&format!("orders/{id}/"))?;
        self.get(url, token).await
    }

    /// Mark an order as paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, payment), fields(order_id = %id))]
    pub async fn pay_order(
        &self,
        token: Option<&str>,
        id: OrderId,
        payment: &PaymentResult,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&format!("orders/{id}/pay/"))?;
        self.put(url, payment, token).await
    }

    /// Mark an order as delivered (staff only).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token), fields(order_id = %id))]
    pub async fn deliver_order(
        &self,
        token: Option<&str>,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&format!("orders/{id}/deliver/"))?;
        self.put(url, &serde_json::json!({}), token).await
    }

    /// List the caller's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token))]
    pub async fn my_orders(&self, token: Option<&str>) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint("orders/myorders/")?;
        self.get(url, token).await
    }

    // =========================================================================
    // User Methods
    // =========================================================================

    /// Exchange credentials for a token and profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo, ApiError> {
        #[derive(Serialize)]
        struct LoginBody<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginBody {
            username: &credentials.email,
            password: credentials.password.expose_secret(),
        };

        let url = self.endpoint("users/login/")?;
        self.post(url, &body, None).await
    }

    /// Create an account; the backend signs the new user in.
    ///
    /// # Errors
    ///
    /// Returns an error if the account exists or the request fails.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<UserInfo, ApiError> {
        #[derive(Serialize)]
        struct RegisterBody<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = RegisterBody {
            name: &registration.name,
            email: &registration.email,
            password: registration.password.expose_secret(),
        };

        let url = self.endpoint("users/register/")?;
        self.post(url, &body, None).await
    }

    /// Fetch a user profile. `id` is a user ID or `profile` for the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token))]
    pub async fn get_user(&self, token: Option<&str>, id: &str) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&format!("users/{id}/"))?;
        self.get(url, token).await
    }

    /// Update the caller's profile. The response carries a fresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, update))]
    pub async fn update_profile(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> Result<UserInfo, ApiError> {
        #[derive(Serialize)]
        struct UpdateBody<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }

        let body = UpdateBody {
            name: update.name.as_deref(),
            email: update.email.as_deref(),
            password: update.password.as_ref().map(ExposeSecret::expose_secret),
        };

        let url = self.endpoint("users/profile/update/")?;
        self.put(url, &body, token).await
    }
}
