//! In-memory persistence for embedding and tests.

use crate::{EditorError, EditorResult, EntityEditor};
use sta_graph::FetchSpec;
use sta_model::Entity;
use sta_types::EntityId;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A `HashMap`-backed [`EntityEditor`].
///
/// Entities are stored whole, so fetch specs are a no-op hint: every
/// relation reference an entity carries is already materialized.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entities: Mutex<HashMap<EntityId, Entity>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<EntityId, Entity>> {
        self.entities.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntityEditor for MemoryStore {
    fn find_by_id(
        &self,
        id: &EntityId,
        _fetch: Option<&FetchSpec>,
    ) -> EditorResult<Option<Entity>> {
        Ok(self.lock().get(id).cloned())
    }

    fn save(&self, entity: Entity) -> EditorResult<Entity> {
        self.lock().insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&self, id: &EntityId) -> EditorResult<()> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EditorError::Missing(id.clone()))
    }

    fn exists_by_id(&self, id: &EntityId) -> EditorResult<bool> {
        Ok(self.lock().contains_key(id))
    }
}
