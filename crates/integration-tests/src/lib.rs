//! Integration tests for Shopfront.
//!
//! The tests drive the storefront action creators end to end against
//! [`MockBackend`], an in-process `axum` server bound to an ephemeral port
//! that serves the storefront REST API from memory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `products` - Listing, detail and reviews
//! - `cart` - Cart contents and the persistent mirror
//! - `orders` - Checkout, payment, delivery and order history
//! - `users` - Sign-in, registration, profile and logout

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use shopfront_core::catalog::seed_products;
use shopfront_core::{
    NewOrder, NewReview, Order, OrderId, OrderItem, OrderItemId, Product, ProductId,
    ProductPage, Review, ReviewId, UserId, UserProfile,
};
use shopfront_storefront::{ApiClient, MemoryStore, Store};

/// Products per listing page.
pub const PAGE_SIZE: usize = 4;

/// Seeded staff account.
pub const ADMIN_EMAIL: &str = "admin@shopfront.test";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Seeded customer account.
pub const CUSTOMER_EMAIL: &str = "ann@shopfront.test";
pub const CUSTOMER_PASSWORD: &str = "ann-pass";
pub const CUSTOMER_NAME: &str = "Ann";

/// A request as seen by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
struct MockUser {
    id: i32,
    name: String,
    email: String,
    password: String,
    is_admin: bool,
}

impl MockUser {
    fn profile(&self) -> UserProfile {
        UserProfile {
            id: Some(UserId::new(self.id)),
            pk: Some(UserId::new(self.id)),
            username: Some(self.email.clone()),
            email: Some(self.email.clone()),
            name: Some(self.name.clone()),
            is_admin: Some(self.is_admin),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredOrder {
    owner: i32,
    order: Order,
}

struct Backend {
    products: Mutex<Vec<Product>>,
    users: Mutex<Vec<MockUser>>,
    orders: Mutex<Vec<StoredOrder>>,
    tokens: Mutex<HashMap<String, i32>>,
    requests: Mutex<Vec<RecordedRequest>>,
    forced_status: Mutex<Option<StatusCode>>,
    next_id: AtomicI32,
}

impl Backend {
    fn seeded() -> Self {
        Self {
            products: Mutex::new(seed_products()),
            users: Mutex::new(vec![
                MockUser {
                    id: 1,
                    name: "Admin".to_string(),
                    email: ADMIN_EMAIL.to_string(),
                    password: ADMIN_PASSWORD.to_string(),
                    is_admin: true,
                },
                MockUser {
                    id: 2,
                    name: CUSTOMER_NAME.to_string(),
                    email: CUSTOMER_EMAIL.to_string(),
                    password: CUSTOMER_PASSWORD.to_string(),
                    is_admin: false,
                },
            ]),
            orders: Mutex::new(Vec::new()),
            tokens: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            forced_status: Mutex::new(None),
            next_id: AtomicI32::new(100),
        }
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Issue a fresh token for `user` and return the session body.
    fn session(&self, user: &MockUser) -> Value {
        let token = format!("token-{}-{}", user.id, self.next_id());
        self.tokens.lock().insert(token.clone(), user.id);

        let mut body = serde_json::to_value(user.profile()).unwrap_or_default();
        body["token"] = Value::String(token);
        body
    }

    /// Resolve the bearer token in `headers` to a user.
    fn authenticate(&self, headers: &HeaderMap) -> Result<MockUser, Response> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                detail(
                    StatusCode::UNAUTHORIZED,
                    "Authentication credentials were not provided.",
                )
            })?;

        let user_id = self.tokens.lock().get(token).copied().ok_or_else(|| {
            detail(
                StatusCode::UNAUTHORIZED,
                "Given token not valid for any token type",
            )
        })?;

        self.users
            .lock()
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "User not found"))
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

// =============================================================================
// Mock Backend
// =============================================================================

/// In-process storefront backend.
///
/// Seeded with the sample catalog and two accounts: a staff user
/// ([`ADMIN_EMAIL`]) and a customer ([`CUSTOMER_EMAIL`]). The server stops
/// when the value is dropped.
pub struct MockBackend {
    base_url: Url,
    backend: Arc<Backend>,
    server: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    /// Start a backend on an ephemeral local port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let backend = Arc::new(Backend::seeded());
        let app = router(Arc::clone(&backend));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend failed");
        });

        let base_url = Url::parse(&format!("http://{addr}")).expect("Invalid mock backend URL");

        Self {
            base_url,
            backend,
            server,
        }
    }

    /// Origin of the backend, e.g. `http://127.0.0.1:54321`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::with_base_url(self.base_url.clone())
    }

    /// A store talking to this backend, mirrored into a fresh in-memory
    /// store. The returned [`MemoryStore`] shares entries with the store's
    /// mirror.
    #[must_use]
    pub fn store(&self) -> (Store, MemoryStore) {
        let mirror = MemoryStore::new();
        (self.store_with_mirror(&mirror), mirror)
    }

    /// A store talking to this backend, hydrated from and mirrored into
    /// `mirror`.
    #[must_use]
    pub fn store_with_mirror(&self, mirror: &MemoryStore) -> Store {
        Store::with_mirror(self.api(), Arc::new(mirror.clone()))
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.requests.lock().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.backend.requests.lock().last().cloned()
    }

    /// Answer the next request with `status` and an empty body.
    pub fn fail_next(&self, status: StatusCode) {
        *self.backend.forced_status.lock() = Some(status);
    }

    /// Replace the catalog.
    pub fn set_products(&self, products: Vec<Product>) {
        *self.backend.products.lock() = products;
    }

    /// Current state of a catalog product.
    #[must_use]
    pub fn product(&self, id: i32) -> Option<Product> {
        self.backend
            .products
            .lock()
            .iter()
            .find(|product| product.id == ProductId::new(id))
            .cloned()
    }

    /// Current state of a stored order.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.backend
            .orders
            .lock()
            .iter()
            .find(|stored| stored.order.id == id)
            .map(|stored| stored.order.clone())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn router(backend: Arc<Backend>) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}/reviews/", post(create_review))
        .route("/api/orders/add/", post(add_order))
        .route("/api/orders/myorders/", get(my_orders))
        .route("/api/orders/{id}/", get(get_order))
        .route("/api/orders/{id}/pay/", put(pay_order))
        .route("/api/orders/{id}/deliver/", put(deliver_order))
        .route("/api/users/login/", post(login))
        .route("/api/users/register/", post(register))
        .route("/api/users/profile/", get(get_profile))
        .route("/api/users/profile/update/", put(update_profile))
        .route("/api/users/{id}/", get(get_user))
        .layer(middleware::from_fn_with_state(Arc::clone(&backend), record))
        .with_state(backend)
}

/// Log every request, and short-circuit it when a failure was queued.
async fn record(State(backend): State<Arc<Backend>>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    backend.requests.lock().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        authorization,
    });

    let forced = backend.forced_status.lock().take();
    if let Some(status) = forced {
        return status.into_response();
    }

    next.run(request).await
}

// =============================================================================
// Product Handlers
// =============================================================================

#[derive(Deserialize)]
struct ListParams {
    keyword: Option<String>,
    page: Option<String>,
}

async fn list_products(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<ListParams>,
) -> Json<ProductPage> {
    let keyword = params.keyword.unwrap_or_default().to_lowercase();
    let matching: Vec<Product> = backend
        .products
        .lock()
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&keyword))
        .cloned()
        .collect();

    let pages = matching.len().div_ceil(PAGE_SIZE).max(1);
    let page = params
        .page
        .and_then(|page| page.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, pages);

    let products = matching
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Json(ProductPage {
        products,
        page: u32::try_from(page).unwrap_or(u32::MAX),
        pages: u32::try_from(pages).unwrap_or(u32::MAX),
    })
}

async fn get_product(State(backend): State<Arc<Backend>>, Path(id): Path<i32>) -> Response {
    backend
        .products
        .lock()
        .iter()
        .find(|product| product.id == ProductId::new(id))
        .map_or_else(
            || detail(StatusCode::NOT_FOUND, "Product not found"),
            |product| Json(product.clone()).into_response(),
        )
}

async fn create_review(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(review): Json<NewReview>,
) -> Response {
    let user = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let review_id = backend.next_id();
    let mut products = backend.products.lock();
    let Some(product) = products
        .iter_mut()
        .find(|product| product.id == ProductId::new(id))
    else {
        return detail(StatusCode::NOT_FOUND, "Product not found");
    };

    if product
        .reviews
        .iter()
        .any(|existing| existing.user == Some(UserId::new(user.id)))
    {
        return detail(StatusCode::BAD_REQUEST, "Product already reviewed");
    }
    if review.rating == 0 {
        return detail(StatusCode::BAD_REQUEST, "Please select a rating");
    }

    product.reviews.push(Review {
        id: ReviewId::new(review_id),
        product: Some(product.id),
        user: Some(UserId::new(user.id)),
        name: user.name.clone(),
        rating: i32::from(review.rating),
        comment: review.comment,
        created_at: Some(Utc::now()),
    });

    let count = product.reviews.len();
    let total: i32 = product.reviews.iter().map(|r| r.rating).sum();
    product.num_reviews = i32::try_from(count).unwrap_or(i32::MAX);
    product.rating = Decimal::from(total) / Decimal::from(product.num_reviews);

    Json(json!("Review Added")).into_response()
}

// =============================================================================
// Order Handlers
// =============================================================================

async fn add_order(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<NewOrder>,
) -> Response {
    let user = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    if body.order_items.is_empty() {
        return detail(StatusCode::BAD_REQUEST, "No Order Items");
    }

    let order_id = backend.next_id();
    let order_items = body
        .order_items
        .iter()
        .map(|line| OrderItem {
            id: OrderItemId::new(backend.next_id()),
            product: Some(line.product),
            name: line.name.clone(),
            qty: line.qty,
            price: line.price,
            image: line.image.clone(),
        })
        .collect();

    let order = Order {
        id: OrderId::new(order_id),
        user: Some(user.profile()),
        payment_method: Some(body.payment_method),
        tax_price: Some(body.tax_price),
        shipping_price: Some(body.shipping_price),
        total_price: Some(body.total_price),
        is_paid: false,
        paid_at: None,
        is_delivered: false,
        delivered_at: None,
        created_at: Some(Utc::now()),
        order_items,
        shipping_address: (!body.shipping_address.is_empty()).then_some(body.shipping_address),
    };

    backend.orders.lock().push(StoredOrder {
        owner: user.id,
        order: order.clone(),
    });

    Json(order).into_response()
}

async fn my_orders(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    let user = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let orders: Vec<Order> = backend
        .orders
        .lock()
        .iter()
        .filter(|stored| stored.owner == user.id)
        .map(|stored| stored.order.clone())
        .collect();

    Json(orders).into_response()
}

async fn get_order(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let user = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let orders = backend.orders.lock();
    match orders.iter().find(|stored| stored.order.id == OrderId::new(id)) {
        None => detail(StatusCode::NOT_FOUND, "Order does not exist"),
        Some(stored) if user.is_admin || stored.owner == user.id => {
            Json(stored.order.clone()).into_response()
        }
        Some(_) => detail(
            StatusCode::BAD_REQUEST,
            "Not authorized to view this order",
        ),
    }
}

async fn pay_order(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = backend.authenticate(&headers) {
        return response;
    }

    let mut orders = backend.orders.lock();
    let Some(stored) = orders
        .iter_mut()
        .find(|stored| stored.order.id == OrderId::new(id))
    else {
        return detail(StatusCode::NOT_FOUND, "Order does not exist");
    };

    stored.order.is_paid = true;
    stored.order.paid_at = Some(Utc::now());
    Json(json!("Order was paid")).into_response()
}

async fn deliver_order(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let user = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if !user.is_admin {
        return detail(
            StatusCode::FORBIDDEN,
            "You do not have permission to perform this action.",
        );
    }

    let mut orders = backend.orders.lock();
    let Some(stored) = orders
        .iter_mut()
        .find(|stored| stored.order.id == OrderId::new(id))
    else {
        return detail(StatusCode::NOT_FOUND, "Order does not exist");
    };

    stored.order.is_delivered = true;
    stored.order.delivered_at = Some(Utc::now());
    Json(json!("Order was delivered")).into_response()
}

// =============================================================================
// User Handlers
// =============================================================================

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct UpdateBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

async fn login(State(backend): State<Arc<Backend>>, Json(body): Json<LoginBody>) -> Response {
    let user = backend
        .users
        .lock()
        .iter()
        .find(|user| user.email == body.username && user.password == body.password)
        .cloned();

    match user {
        Some(user) => Json(backend.session(&user)).into_response(),
        None => detail(
            StatusCode::UNAUTHORIZED,
            "No active account found with the given credentials",
        ),
    }
}

async fn register(
    State(backend): State<Arc<Backend>>,
    Json(body): Json<RegisterBody>,
) -> Response {
    let user = {
        let mut users = backend.users.lock();
        if users.iter().any(|user| user.email == body.email) {
            return detail(
                StatusCode::BAD_REQUEST,
                "User with this email already exists",
            );
        }

        let user = MockUser {
            id: backend.next_id(),
            name: body.name,
            email: body.email,
            password: body.password,
            is_admin: false,
        };
        users.push(user.clone());
        user
    };

    Json(backend.session(&user)).into_response()
}

async fn get_profile(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    match backend.authenticate(&headers) {
        Ok(user) => Json(user.profile()).into_response(),
        Err(response) => response,
    }
}

async fn get_user(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let caller = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    if !caller.is_admin {
        return detail(
            StatusCode::FORBIDDEN,
            "You do not have permission to perform this action.",
        );
    }

    let Ok(user_id) = id.parse::<i32>() else {
        return detail(StatusCode::NOT_FOUND, "User does not exist");
    };
    backend
        .users
        .lock()
        .iter()
        .find(|user| user.id == user_id)
        .map_or_else(
            || detail(StatusCode::NOT_FOUND, "User does not exist"),
            |user| Json(user.profile()).into_response(),
        )
}

async fn update_profile(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<UpdateBody>,
) -> Response {
    let caller = match backend.authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let updated = {
        let mut users = backend.users.lock();
        let Some(user) = users.iter_mut().find(|user| user.id == caller.id) else {
            return detail(StatusCode::NOT_FOUND, "User does not exist");
        };
        if let Some(name) = body.name {
            user.name = name;
        }
        if let Some(email) = body.email {
            user.email = email;
        }
        if let Some(password) = body.password.filter(|password| !password.is_empty()) {
            user.password = password;
        }
        user.clone()
    };

    Json(backend.session(&updated)).into_response()
}
