//! # HTTP Routes
//!
//! Binds the page and API controllers to axum routes.
//!
//! ```text
//! GET  /health                      → "OK"
//!
//! GET  /products                    → Index
//! GET  /products/details[/{id}]     → Details
//! GET  /products/create             → Create form
//! POST /products/create             → Create
//! GET  /products/edit[/{id}]        → Edit form
//! POST /products/edit/{id}          → Edit
//! GET  /products/delete[/{id}]      → Delete confirmation
//! POST /products/delete/{id}        → DeleteConfirmed
//!
//! GET    /api/products              → list
//! POST   /api/products              → create (201 + Location)
//! GET    /api/products/{id}         → get
//! PUT    /api/products/{id}         → update
//! DELETE /api/products/{id}         → delete
//! ```
//!
//! Page forms are posted as `application/x-www-form-urlencoded`, API bodies
//! as JSON.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Form, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use stockroom_core::{Product, SharedRepository};

use crate::binding::ProductForm;
use crate::controllers::products_api::API_ROUTE;
use crate::controllers::{ApiResponse, PageResult, ProductsApiController, ProductsController};
use crate::error::WebResult;

// =============================================================================
// Shared State
// =============================================================================

/// Controllers shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pages: ProductsController,
    pub api: ProductsApiController,
}

impl AppState {
    /// Builds both controllers over the same repository.
    pub fn new(repo: SharedRepository<Product>) -> Self {
        AppState {
            pages: ProductsController::new(repo.clone()),
            api: ProductsApiController::new(repo),
        }
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .merge(page_routes())
        .merge(api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(index))
        .route("/products/details", get(details_without_id))
        .route("/products/details/{id}", get(details))
        .route("/products/create", get(create_form).post(create))
        .route("/products/edit", get(edit_without_id))
        .route("/products/edit/{id}", get(edit_form).post(edit))
        .route("/products/delete", get(delete_without_id))
        .route("/products/delete/{id}", get(delete_form).post(delete_confirmed))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(API_ROUTE, get(get_products).post(post_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(put_product).delete(delete_product),
        )
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

// =============================================================================
// Page Handlers
// =============================================================================

/// An id segment that isn't a number is treated as no id at all.
fn parse_page_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

async fn index(State(state): State<AppState>) -> WebResult<PageResult<Vec<Product>>> {
    state.pages.index().await
}

async fn details_without_id(State(state): State<AppState>) -> WebResult<PageResult<Product>> {
    state.pages.details(None).await
}

async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<PageResult<Product>> {
    state.pages.details(parse_page_id(&id)).await
}

async fn create_form(State(state): State<AppState>) -> PageResult<Product> {
    state.pages.create_form()
}

async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> WebResult<PageResult<Product>> {
    let (product, model_state) = form.bind();
    state.pages.create(product, &model_state).await
}

async fn edit_without_id(State(state): State<AppState>) -> WebResult<PageResult<Product>> {
    state.pages.edit_form(None).await
}

async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<PageResult<Product>> {
    state.pages.edit_form(parse_page_id(&id)).await
}

async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> WebResult<PageResult<Product>> {
    let (product, model_state) = form.bind();
    state.pages.edit(id, product, &model_state).await
}

async fn delete_without_id(State(state): State<AppState>) -> WebResult<PageResult<Product>> {
    state.pages.delete_form(None).await
}

async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<PageResult<Product>> {
    state.pages.delete_form(parse_page_id(&id)).await
}

async fn delete_confirmed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<PageResult<Product>> {
    state.pages.delete_confirmed(id).await
}

// =============================================================================
// API Handlers
// =============================================================================

async fn get_products(State(state): State<AppState>) -> WebResult<ApiResponse<Vec<Product>>> {
    state.api.get_products().await
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<ApiResponse<Product>> {
    state.api.get_product(id).await
}

async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(product): Json<Product>,
) -> WebResult<ApiResponse<Product>> {
    state.api.put_product(id, product).await
}

async fn post_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> WebResult<ApiResponse<Product>> {
    state.api.post_product(product).await
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<ApiResponse<Product>> {
    state.api.delete_product(id).await
}

// =============================================================================
// Router Tests
// =============================================================================
