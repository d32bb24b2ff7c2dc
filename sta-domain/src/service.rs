//! Request-level orchestration.
//!
//! One [`EntityService`] per deployment wires the persistence editor, the
//! event sink, and the named-lock registry together and exposes the CRUD
//! surface the protocol layer calls into. All operations run synchronously
//! inside the caller's transaction.

use crate::{Aggregate, DomainError, DomainResult, EntityEditor, EventSink, LockRegistry};
use sta_graph::{ExpandDirective, GraphBuilder};
use sta_model::{Entity, EntityKind};
use sta_types::EntityId;
use std::sync::Arc;
use tracing::debug;

/// CRUD orchestration over one editor and one sink.
pub struct EntityService {
    editor: Arc<dyn EntityEditor>,
    sink: Arc<dyn EventSink>,
    locks: LockRegistry,
}

impl EntityService {
    /// Creates a service over the given collaborators.
    pub fn new(editor: Arc<dyn EntityEditor>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            editor,
            sink,
            locks: LockRegistry::new(),
        }
    }

    /// Reads one entity, planning the fetch graph from the kind's baseline
    /// plus an optional expand directive.
    ///
    /// An entity stored under the id but of a different kind reads as
    /// absent.
    pub fn get(
        &self,
        kind: EntityKind,
        id: &EntityId,
        expand: Option<&ExpandDirective>,
    ) -> DomainResult<Option<Entity>> {
        let mut builder = GraphBuilder::for_kind(kind);
        if let Some(directive) = expand {
            builder.add_expand(directive)?;
        }
        let spec = builder.build();
        match &spec {
            Some(spec) => debug!("Planned read of {} {} with fetch [{}]", kind, id, spec),
            None => debug!("Planned read of {} {} with default lazy loading", kind, id),
        }
        let found = self.editor.find_by_id(id, spec.as_ref())?;
        Ok(found.filter(|entity| entity.kind() == kind))
    }

    /// Creates an entity and emits a creation event.
    pub fn create(&self, entity: Entity) -> DomainResult<Entity> {
        Aggregate::new(entity, self.editor.clone(), self.sink.clone())?.create()
    }

    /// Updates an existing entity and emits an update event annotated with
    /// the change set.
    pub fn update(&self, entity: Entity) -> DomainResult<Entity> {
        let old = self
            .editor
            .find_by_id(entity.id(), None)?
            .ok_or_else(|| DomainError::NotFound(entity.id().clone()))?;
        Aggregate::new(entity, self.editor.clone(), self.sink.clone())?.update(old)
    }

    /// Deletes an entity and emits a deletion event carrying its last
    /// snapshot.
    pub fn delete(&self, id: &EntityId) -> DomainResult<Entity> {
        let existing = self
            .editor
            .find_by_id(id, None)?
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;
        Aggregate::new(existing, self.editor.clone(), self.sink.clone())?.delete()
    }

    /// Returns the stored entity for `candidate`'s id, creating it when
    /// absent.
    ///
    /// The whole check-then-create sequence runs under the named lock for
    /// `key` (a business identifier such as a unit dedup key), so two
    /// concurrent requests for the same logical resource cannot both
    /// create. No event is emitted on the found path.
    pub fn find_or_create(&self, key: &str, candidate: Entity) -> DomainResult<Entity> {
        let _section = self.locks.guard(key);
        if self.editor.exists_by_id(candidate.id())? {
            return self
                .editor
                .find_by_id(candidate.id(), None)?
                .ok_or_else(|| DomainError::NotFound(candidate.id().clone()));
        }
        self.create(candidate)
    }
}
