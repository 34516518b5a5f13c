//! # Products Page Controller
//!
//! The human-facing CRUD flow: list, details, create, edit and delete with
//! a confirmation step.
//!
//! ## Decision Table
//! ```text
//! ┌──────────────────────┬────────────────────────────────┬──────────────────────┐
//! │ Action               │ Condition                      │ Result               │
//! ├──────────────────────┼────────────────────────────────┼──────────────────────┤
//! │ Index                │ always                         │ View(all products)   │
//! │ Details/Edit/Delete  │ id missing                     │ NotFound             │
//! │   (GET)              │ get_by_id(id) is None          │ NotFound             │
//! │                      │ otherwise                      │ View(product)        │
//! │ Create (GET)         │ always                         │ View(empty product)  │
//! │ Create (POST)        │ model state invalid            │ View(submitted)      │
//! │                      │ otherwise → create()           │ Redirect(Index)      │
//! │ Edit (POST)          │ route id ≠ product id          │ NotFound             │
//! │                      │ model state invalid            │ View(submitted)      │
//! │                      │ otherwise → update()           │ Redirect(Index)      │
//! │ DeleteConfirmed      │ get_by_id(id) is None          │ NotFound             │
//! │   (POST)             │ otherwise → delete()           │ Redirect(Index)      │
//! └──────────────────────┴────────────────────────────────┴──────────────────────┘
//! ```
//!
//! Every branch makes at most one lookup followed by one mutation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use stockroom_core::{ModelState, Product, RepositoryError, SharedRepository};

use crate::error::WebResult;

/// Name of the list action every successful mutation redirects to.
pub const INDEX_ACTION: &str = "Index";

// =============================================================================
// Page Result
// =============================================================================

/// What a page action decided to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PageResult<M> {
    /// Render `view` with `model`, showing `errors` next to the form fields.
    View {
        view: &'static str,
        model: M,
        errors: ModelState,
    },

    /// Send the browser to another action.
    RedirectToAction { action: &'static str },

    /// 404 with an empty body.
    NotFound,
}

impl<M> PageResult<M> {
    fn view(view: &'static str, model: M) -> Self {
        PageResult::View {
            view,
            model,
            errors: ModelState::new(),
        }
    }

    fn redisplay(view: &'static str, model: M, errors: &ModelState) -> Self {
        PageResult::View {
            view,
            model,
            errors: errors.clone(),
        }
    }

    fn to_index() -> Self {
        PageResult::RedirectToAction {
            action: INDEX_ACTION,
        }
    }

    /// The rendered model, if this result is a view.
    pub fn model(&self) -> Option<&M> {
        match self {
            PageResult::View { model, .. } => Some(model),
            _ => None,
        }
    }
}

/// Route of a page action: `Index` is `/products`, the rest `/products/{action}`.
pub fn action_location(action: &str) -> String {
    if action == INDEX_ACTION {
        "/products".to_string()
    } else {
        format!("/products/{}", action.to_lowercase())
    }
}

#[derive(Serialize)]
struct ViewDocument<'a, M> {
    view: &'a str,
    model: &'a M,
    errors: &'a ModelState,
}

/// Views render as `{ "view", "model", "errors" }` for the page templates.
impl<M: Serialize> IntoResponse for PageResult<M> {
    fn into_response(self) -> Response {
        match self {
            PageResult::View {
                view,
                model,
                errors,
            } => Json(ViewDocument {
                view,
                model: &model,
                errors: &errors,
            })
            .into_response(),
            PageResult::RedirectToAction { action } => {
                Redirect::to(&action_location(action)).into_response()
            }
            PageResult::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Page controller over any product repository.
#[derive(Clone)]
pub struct ProductsController {
    repo: SharedRepository<Product>,
}

impl ProductsController {
    pub fn new(repo: SharedRepository<Product>) -> Self {
        ProductsController { repo }
    }

    /// GET /products
    pub async fn index(&self) -> WebResult<PageResult<Vec<Product>>> {
        let products = self.repo.get_all().await?;
        Ok(PageResult::view("Index", products))
    }

    /// GET /products/details/{id}
    pub async fn details(&self, id: Option<i64>) -> WebResult<PageResult<Product>> {
        self.show("Details", id).await
    }

    /// GET /products/create
    pub fn create_form(&self) -> PageResult<Product> {
        PageResult::view("Create", Product::default())
    }

    /// POST /products/create
    pub async fn create(
        &self,
        product: Product,
        state: &ModelState,
    ) -> WebResult<PageResult<Product>> {
        if !state.is_valid() {
            return Ok(PageResult::redisplay("Create", product, state));
        }

        let created = self.repo.create(product).await?;
        info!(id = created.id, name = %created.name, "Product created");

        Ok(PageResult::to_index())
    }

    /// GET /products/edit/{id}
    pub async fn edit_form(&self, id: Option<i64>) -> WebResult<PageResult<Product>> {
        self.show("Edit", id).await
    }

    /// POST /products/edit/{id}
    ///
    /// A product whose id disagrees with the route is answered with
    /// `NotFound`, as is an update the store reports as missing.
    pub async fn edit(
        &self,
        id: i64,
        product: Product,
        state: &ModelState,
    ) -> WebResult<PageResult<Product>> {
        if let Err(e) = product.ensure_route_id(id) {
            warn!(error = %e, "Edit rejected");
            return Ok(PageResult::NotFound);
        }

        if !state.is_valid() {
            return Ok(PageResult::redisplay("Edit", product, state));
        }

        match self.repo.update(&product).await {
            Ok(()) => {
                info!(id, "Product updated");
                Ok(PageResult::to_index())
            }
            Err(RepositoryError::NotFound { .. }) => {
                warn!(id, "Product vanished before update");
                Ok(PageResult::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// GET /products/delete/{id}
    pub async fn delete_form(&self, id: Option<i64>) -> WebResult<PageResult<Product>> {
        self.show("Delete", id).await
    }

    /// POST /products/delete/{id}
    pub async fn delete_confirmed(&self, id: i64) -> WebResult<PageResult<Product>> {
        let Some(product) = self.repo.get_by_id(id).await? else {
            warn!(id, "Delete confirmed for a missing product");
            return Ok(PageResult::NotFound);
        };

        self.repo.delete(&product).await?;
        info!(id, "Product deleted");

        Ok(PageResult::to_index())
    }

    /// Whether a product with `id` is stored.
    pub async fn product_exists(&self, id: i64) -> WebResult<bool> {
        Ok(self.repo.get_by_id(id).await?.is_some())
    }

    async fn show(&self, view: &'static str, id: Option<i64>) -> WebResult<PageResult<Product>> {
        let Some(id) = id else {
            return Ok(PageResult::NotFound);
        };

        match self.repo.get_by_id(id).await? {
            Some(product) => Ok(PageResult::view(view, product)),
            None => {
                warn!(id, view, "Product not found");
                Ok(PageResult::NotFound)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
