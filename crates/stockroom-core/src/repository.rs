//! # Repository Contract
//!
//! The generic persistence interface every controller is written against.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository<T: Entity>                                │
//! │                                                                         │
//! │  ProductsController / ProductsApiController                            │
//! │       │                                                                 │
//! │       │  repo.get_by_id(3).await?                                       │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────┐     ┌──────────────────────────────┐  │
//! │  │ stockroom_db::              │     │ stockroom_core::fake::       │  │
//! │  │   ProductRepository (SQLite)│ or  │   FakeRepository (tests)     │  │
//! │  └─────────────────────────────┘     └──────────────────────────────┘  │
//! │                                                                         │
//! │  get_all   → Vec<T>            (empty when nothing is stored)          │
//! │  get_by_id → Option<T>         (None is a normal outcome)              │
//! │  create    → T                 (with its store-assigned id)            │
//! │  update    → ()                (overwrites every field)                │
//! │  delete    → ()                (caller confirmed existence first)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is one round trip to the store; controllers make at most a
//! lookup followed by a single mutation per request.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::RepositoryError;
use crate::types::Entity;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepositoryError>;

/// A repository shared between request handlers.
pub type SharedRepository<T> = Arc<dyn Repository<T>>;

/// Basic persistence operations over a single entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Lists every stored entity.
    async fn get_all(&self) -> RepoResult<Vec<T>>;

    /// Looks up an entity by identifier.
    ///
    /// ## Returns
    /// * `Ok(Some(T))` - entity found
    /// * `Ok(None)` - no entity with that id
    async fn get_by_id(&self, id: i64) -> RepoResult<Option<T>>;

    /// Persists a new entity, assigning an identifier if it has none.
    ///
    /// Completes only after the write is durable. Returns the stored entity.
    async fn create(&self, entity: T) -> RepoResult<T>;

    /// Overwrites the stored entity sharing `entity`'s identifier.
    ///
    /// ## Errors
    /// * `RepositoryError::NotFound` - nothing is stored under that id
    async fn update(&self, entity: &T) -> RepoResult<()>;

    /// Removes the stored entity sharing `entity`'s identifier.
    ///
    /// ## Errors
    /// * `RepositoryError::NotFound` - nothing is stored under that id
    async fn delete(&self, entity: &T) -> RepoResult<()>;
}
