//! # Products API Controller
//!
//! The machine-facing REST flow under `/api/products`.
//!
//! ```text
//! ┌────────────────────────────┬──────────────────────────────┬─────────────────┐
//! │ Route                      │ Condition                    │ Response        │
//! ├────────────────────────────┼──────────────────────────────┼─────────────────┤
//! │ GET    /api/products       │ always                       │ 200 [products]  │
//! │ GET    /api/products/{id}  │ get_by_id(id) is None        │ 404             │
//! │                            │ otherwise                    │ 200 product     │
//! │ PUT    /api/products/{id}  │ route id ≠ body id           │ 400             │
//! │                            │ otherwise → update()         │ 204             │
//! │ POST   /api/products       │ always → create()            │ 201 + Location  │
//! │ DELETE /api/products/{id}  │ get_by_id(id) is None        │ 404             │
//! │                            │ otherwise → delete()         │ 204             │
//! └────────────────────────────┴──────────────────────────────┴─────────────────┘
//! ```

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use stockroom_core::{Product, RepositoryError, SharedRepository};

use crate::error::WebResult;

/// Base route of the API; `CreatedAt` locations point below it.
pub const API_ROUTE: &str = "/api/products";

/// Location of the GET operation for a single product.
pub fn product_location(id: i64) -> String {
    format!("{API_ROUTE}/{id}")
}

/// Outcome of an API operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with `T` as the JSON body.
    Ok(T),
    /// 404, empty body.
    NotFound,
    /// 400, empty body.
    BadRequest,
    /// 204.
    NoContent,
    /// 201 with a `Location` header and `body` as the JSON body.
    CreatedAt { location: String, body: T },
}

impl<T> ApiResponse<T> {
    /// HTTP status this response renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Ok(_) => StatusCode::OK,
            ApiResponse::NotFound => StatusCode::NOT_FOUND,
            ApiResponse::BadRequest => StatusCode::BAD_REQUEST,
            ApiResponse::NoContent => StatusCode::NO_CONTENT,
            ApiResponse::CreatedAt { .. } => StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiResponse::Ok(body) => (status, Json(body)).into_response(),
            ApiResponse::CreatedAt { location, body } => {
                (status, [(header::LOCATION, location)], Json(body)).into_response()
            }
            ApiResponse::NotFound | ApiResponse::BadRequest | ApiResponse::NoContent => {
                status.into_response()
            }
        }
    }
}

/// REST controller over any product repository.
#[derive(Clone)]
pub struct ProductsApiController {
    repo: SharedRepository<Product>,
}

impl ProductsApiController {
    pub fn new(repo: SharedRepository<Product>) -> Self {
        ProductsApiController { repo }
    }

    pub async fn get_products(&self) -> WebResult<ApiResponse<Vec<Product>>> {
        Ok(ApiResponse::Ok(self.repo.get_all().await?))
    }

    pub async fn get_product(&self, id: i64) -> WebResult<ApiResponse<Product>> {
        match self.repo.get_by_id(id).await? {
            Some(product) => Ok(ApiResponse::Ok(product)),
            None => Ok(ApiResponse::NotFound),
        }
    }

    /// Replaces the product at `id` with `product`.
    ///
    /// There is no existence check before the update; a store that reports
    /// the row as missing turns into a 404.
    pub async fn put_product(&self, id: i64, product: Product) -> WebResult<ApiResponse<Product>> {
        if let Err(e) = product.ensure_route_id(id) {
            warn!(error = %e, "PUT rejected");
            return Ok(ApiResponse::BadRequest);
        }

        match self.repo.update(&product).await {
            Ok(()) => {
                info!(id, "Product updated");
                Ok(ApiResponse::NoContent)
            }
            Err(RepositoryError::NotFound { .. }) => {
                warn!(id, "PUT for a missing product");
                Ok(ApiResponse::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn post_product(&self, product: Product) -> WebResult<ApiResponse<Product>> {
        let created = self.repo.create(product).await?;
        info!(id = created.id, name = %created.name, "Product created");

        Ok(ApiResponse::CreatedAt {
            location: product_location(created.id),
            body: created,
        })
    }

    pub async fn delete_product(&self, id: i64) -> WebResult<ApiResponse<Product>> {
        let Some(product) = self.repo.get_by_id(id).await? else {
            return Ok(ApiResponse::NotFound);
        };

        self.repo.delete(&product).await?;
        info!(id, "Product deleted");

        Ok(ApiResponse::NoContent)
    }

    pub async fn product_exists(&self, id: i64) -> WebResult<bool> {
        Ok(self.repo.get_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use stockroom_core::fake::{CallKind, FakeRepository, RepositoryCall};
    use stockroom_core::Money;

    fn products() -> Vec<Product> {
        vec![
            Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3),
            Product::new("FiberPen", "Blue", Money::from_cents(1200), 1500).with_id(11),
        ]
    }

    fn product(id: i64) -> Product {
        products()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    fn controller() -> (Arc<FakeRepository<Product>>, ProductsApiController) {
        let repo = Arc::new(FakeRepository::with_entities(products()));
        let controller = ProductsApiController::new(repo.clone());
        (repo, controller)
    }

    #[tokio::test]
    async fn test_get_products_returns_all() {
        let (_repo, controller) = controller();

        let result = controller.get_products().await.unwrap();

        assert_eq!(result, ApiResponse::Ok(products()));
        assert_eq!(result.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let (repo, controller) = controller();

        let result = controller.get_product(0).await.unwrap();

        assert_eq!(result, ApiResponse::NotFound);
        assert_eq!(result.status().as_u16(), 404);
        assert_eq!(repo.mutation_count(), 0);
    }

    #[rstest]
    #[case(3)]
    #[case(11)]
    #[tokio::test]
    async fn test_get_product_returns_every_field(#[case] id: i64) {
        let (_repo, controller) = controller();

        let ApiResponse::Ok(found) = controller.get_product(id).await.unwrap() else {
            panic!("expected 200 for product {id}");
        };

        let expected = product(id);
        assert_eq!(found.id, id);
        assert_eq!(found.name, expected.name);
        assert_eq!(found.color, expected.color);
        assert_eq!(found.price, expected.price);
        assert_eq!(found.stock, expected.stock);
    }

    #[tokio::test]
    async fn test_put_with_mismatched_id_is_bad_request() {
        let (repo, controller) = controller();

        let result = controller.put_product(0, product(3)).await.unwrap();

        assert_eq!(result, ApiResponse::BadRequest);
        assert_eq!(repo.times_called(CallKind::Update), 0);
    }

    #[tokio::test]
    async fn test_put_updates_once_and_returns_no_content() {
        let (repo, controller) = controller();
        let mut pen = product(11);
        pen.price = Money::from_cents(1350);

        let result = controller.put_product(11, pen.clone()).await.unwrap();

        assert_eq!(result, ApiResponse::NoContent);
        assert_eq!(repo.calls(), vec![RepositoryCall::Update(pen)]);
    }

    #[tokio::test]
    async fn test_put_for_missing_product_still_calls_update_once() {
        let repo = Arc::new(FakeRepository::<Product>::new());
        let controller = ProductsApiController::new(repo.clone());

        let result = controller.put_product(11, product(11)).await.unwrap();

        assert_eq!(result, ApiResponse::NotFound);
        assert_eq!(repo.calls(), vec![RepositoryCall::Update(product(11))]);
    }

    #[tokio::test]
    async fn test_post_creates_once_and_points_at_get() {
        let repo = Arc::new(FakeRepository::<Product>::new());
        let controller = ProductsApiController::new(repo.clone());
        let submitted = Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133);

        let result = controller.post_product(submitted.clone()).await.unwrap();

        assert_eq!(
            result,
            ApiResponse::CreatedAt {
                location: "/api/products/1".to_string(),
                body: submitted.clone().with_id(1),
            }
        );
        assert_eq!(repo.times_called(CallKind::Create), 1);
        assert_eq!(repo.last_call(), Some(RepositoryCall::Create(submitted)));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let (repo, controller) = controller();

        let result = controller.delete_product(0).await.unwrap();

        assert_eq!(result, ApiResponse::NotFound);
        assert_eq!(repo.times_called(CallKind::Delete), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_fetched_product_once() {
        let (repo, controller) = controller();

        let result = controller.delete_product(11).await.unwrap();

        assert_eq!(result, ApiResponse::NoContent);
        assert_eq!(repo.times_called(CallKind::Delete), 1);
        assert_eq!(repo.last_call(), Some(RepositoryCall::Delete(product(11))));
        assert_eq!(repo.entities(), vec![product(3)]);
    }

    #[tokio::test]
    async fn test_product_exists() {
        let (_repo, controller) = controller();

        assert!(controller.product_exists(11).await.unwrap());
        assert!(!controller.product_exists(12).await.unwrap());
    }
}
