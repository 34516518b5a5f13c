//! # Recording Fake Repository
//!
//! An in-memory [`Repository`] for controller tests. It behaves like a real
//! store (ids are assigned on create, updates and deletes of missing rows
//! fail with `NotFound`) and records every call so tests can verify the
//! controller-to-repository interaction.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockroom_core::fake::{CallKind, FakeRepository};
//! use stockroom_core::{Money, Product, Repository};
//!
//! let repo = Arc::new(FakeRepository::with_entities([
//!     Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3),
//! ]));
//!
//! assert!(repo.get_by_id(0).await.unwrap().is_none());
//! assert_eq!(repo.times_called(CallKind::GetById), 1);
//! assert_eq!(repo.times_called(CallKind::Create), 0);
//! ```
//!
//! Compiled for this crate's own tests and for other crates through the
//! `test-utils` feature.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RepositoryError;
use crate::repository::{RepoResult, Repository};
use crate::types::Entity;

// =============================================================================
// Call Log
// =============================================================================

/// One recorded repository call, with its argument.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall<T> {
    GetAll,
    GetById(i64),
    Create(T),
    Update(T),
    Delete(T),
}

/// The operation a [`RepositoryCall`] invoked, without its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl<T> RepositoryCall<T> {
    /// The operation this call invoked.
    pub fn kind(&self) -> CallKind {
        match self {
            RepositoryCall::GetAll => CallKind::GetAll,
            RepositoryCall::GetById(_) => CallKind::GetById,
            RepositoryCall::Create(_) => CallKind::Create,
            RepositoryCall::Update(_) => CallKind::Update,
            RepositoryCall::Delete(_) => CallKind::Delete,
        }
    }

    /// `true` for create, update and delete.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.kind(),
            CallKind::Create | CallKind::Update | CallKind::Delete
        )
    }
}

// =============================================================================
// Fake Repository
// =============================================================================

#[derive(Debug)]
struct FakeState<T> {
    entities: BTreeMap<i64, T>,
    calls: Vec<RepositoryCall<T>>,
    failures: HashMap<CallKind, RepositoryError>,
}

/// In-memory repository that records its calls.
#[derive(Debug)]
pub struct FakeRepository<T> {
    state: Mutex<FakeState<T>>,
}

impl<T: Entity> Default for FakeRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> FakeRepository<T> {
    /// An empty store.
    pub fn new() -> Self {
        FakeRepository {
            state: Mutex::new(FakeState {
                entities: BTreeMap::new(),
                calls: Vec::new(),
                failures: HashMap::new(),
            }),
        }
    }

    /// A store pre-loaded with `entities`, keyed by their ids.
    ///
    /// Seeding is not recorded as calls.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.lock();
            for entity in entities {
                state.entities.insert(entity.id(), entity);
            }
        }
        repo
    }

    /// Makes every later call of `kind` fail with `error` (after recording it).
    pub fn fail_with(&self, kind: CallKind, error: RepositoryError) {
        self.lock().failures.insert(kind, error);
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<RepositoryCall<T>> {
        self.lock().calls.clone()
    }

    /// How many times `kind` was invoked.
    pub fn times_called(&self, kind: CallKind) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.kind() == kind)
            .count()
    }

    /// How many create/update/delete calls were made.
    pub fn mutation_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.is_mutation())
            .count()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<RepositoryCall<T>> {
        self.lock().calls.last().cloned()
    }

    /// Snapshot of the stored entities, ordered by id.
    pub fn entities(&self) -> Vec<T> {
        self.lock().entities.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState<T>> {
        // A panicking test thread must not hide the call log from the others
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: RepositoryCall<T>) -> RepoResult<MutexGuard<'_, FakeState<T>>> {
        let mut state = self.lock();
        let kind = call.kind();
        state.calls.push(call);
        if let Some(error) = state.failures.get(&kind).cloned() {
            return Err(error);
        }
        Ok(state)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for FakeRepository<T> {
    async fn get_all(&self) -> RepoResult<Vec<T>> {
        let state = self.record(RepositoryCall::GetAll)?;
        Ok(state.entities.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        let state = self.record(RepositoryCall::GetById(id))?;
        Ok(state.entities.get(&id).cloned())
    }

    async fn create(&self, mut entity: T) -> RepoResult<T> {
        let mut state = self.record(RepositoryCall::Create(entity.clone()))?;

        if !entity.has_id() {
            let next_id = state.entities.keys().next_back().map_or(1, |max| max + 1);
            entity.set_id(next_id);
        } else if state.entities.contains_key(&entity.id()) {
            return Err(RepositoryError::Conflict(format!(
                "{} {} already exists",
                T::ENTITY_NAME,
                entity.id()
            )));
        }

        state.entities.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> RepoResult<()> {
        let mut state = self.record(RepositoryCall::Update(entity.clone()))?;

        match state.entities.get_mut(&entity.id()) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found(T::ENTITY_NAME, entity.id())),
        }
    }

    async fn delete(&self, entity: &T) -> RepoResult<()> {
        let mut state = self.record(RepositoryCall::Delete(entity.clone()))?;

        match state.entities.remove(&entity.id()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found(T::ENTITY_NAME, entity.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Money, Product};

    fn products() -> Vec<Product> {
        vec![
            Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133).with_id(3),
            Product::new("FiberPen", "Blue", Money::from_cents(1200), 1500).with_id(11),
        ]
    }

    #[tokio::test]
    async fn test_lookup_and_listing() {
        let repo = FakeRepository::with_entities(products());

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
        assert_eq!(repo.get_by_id(3).await.unwrap(), Some(products()[0].clone()));
        assert_eq!(repo.get_by_id(0).await.unwrap(), None);

        assert_eq!(
            repo.calls(),
            vec![
                RepositoryCall::GetAll,
                RepositoryCall::GetById(3),
                RepositoryCall::GetById(0),
            ]
        );
        assert_eq!(repo.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = FakeRepository::with_entities(products());
        let created = repo
            .create(Product::new("Mug", "White", Money::from_cents(450), 20))
            .await
            .unwrap();

        assert_eq!(created.id, 12);
        assert_eq!(repo.times_called(CallKind::Create), 1);
        assert_eq!(repo.entities().len(), 3);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_id_and_rejects_duplicates() {
        let repo = FakeRepository::new();
        let toy = products()[0].clone();

        assert_eq!(repo.create(toy.clone()).await.unwrap().id, 3);
        let err = repo.create(toy).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_fail() {
        let repo = FakeRepository::<Product>::new();
        let ghost = products()[1].clone();

        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err, RepositoryError::not_found("Product", 11));
        let err = repo.delete(&ghost).await.unwrap_err();
        assert_eq!(err, RepositoryError::not_found("Product", 11));

        // Failed calls are still recorded
        assert_eq!(repo.mutation_count(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = FakeRepository::with_entities(products());
        let mut pen = products()[1].clone();
        pen.name = "GelPen".to_string();
        pen.stock = 0;

        repo.update(&pen).await.unwrap();
        assert_eq!(repo.get_by_id(11).await.unwrap(), Some(pen.clone()));
        assert_eq!(repo.last_call(), Some(RepositoryCall::GetById(11)));
    }

    #[tokio::test]
    async fn test_programmed_failure() {
        let repo = FakeRepository::<Product>::new();
        repo.fail_with(
            CallKind::GetAll,
            RepositoryError::Unavailable("down".to_string()),
        );

        assert!(repo.get_all().await.is_err());
        assert_eq!(repo.times_called(CallKind::GetAll), 1);
        assert!(repo.get_by_id(1).await.is_ok());
    }
}
