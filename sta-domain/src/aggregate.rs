//! The aggregate mutation guard.

use crate::{
    compute_difference_map, ChangeSet, DomainError, DomainResult, EntityEditor, EntityEvent,
    EventSink,
};
use sta_model::Entity;
use std::sync::Arc;
use tracing::debug;

/// Wraps one entity together with its persistence editor and event sink.
///
/// Every mutation performs exactly one editor call followed by exactly one
/// event emission; if persistence fails, no event is observable. An
/// aggregate without a bound editor is read-only; mutating it is a wiring
/// error, reported as [`DomainError::ReadOnlyAggregate`].
pub struct Aggregate {
    entity: Entity,
    editor: Option<Arc<dyn EntityEditor>>,
    sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregate")
            .field("entity", &self.entity)
            .finish_non_exhaustive()
    }
}

impl Aggregate {
    /// Creates a mutable aggregate, enforcing per-kind construction
    /// invariants before any I/O:
    /// - an Observation must reference a datastream and a feature of
    ///   interest;
    /// - a Datastream must reference a thing, a sensor, and an observed
    ///   property.
    pub fn new(
        entity: Entity,
        editor: Arc<dyn EntityEditor>,
        sink: Arc<dyn EventSink>,
    ) -> DomainResult<Self> {
        validate(&entity)?;
        Ok(Self {
            entity,
            editor: Some(editor),
            sink,
        })
    }

    /// Creates an aggregate with no editor bound; any mutation fails.
    #[must_use]
    pub fn read_only(entity: Entity, sink: Arc<dyn EventSink>) -> Self {
        Self {
            entity,
            editor: None,
            sink,
        }
    }

    /// The wrapped entity.
    #[must_use]
    pub const fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Persists the entity as a new record and emits a creation event.
    pub fn create(&self) -> DomainResult<Entity> {
        let saved = self.editor()?.save(self.entity.clone())?;
        debug!("Created {} {}", saved.kind(), saved.id());
        self.sink.publish(EntityEvent::Saved {
            old: None,
            new: saved.clone(),
            changed: ChangeSet::new(),
        });
        Ok(saved)
    }

    /// Persists the entity over `old` and emits an update event annotated
    /// with the computed change set.
    pub fn update(&self, old: Entity) -> DomainResult<Entity> {
        let saved = self.editor()?.save(self.entity.clone())?;
        let changed = compute_difference_map(&old, &saved);
        debug!("Updated {} {}, changed [{}]", saved.kind(), saved.id(), changed);
        self.sink.publish(EntityEvent::Saved {
            old: Some(old),
            new: saved.clone(),
            changed,
        });
        Ok(saved)
    }

    /// Deletes the entity by identifier and emits a deletion event carrying
    /// the pre-deletion snapshot.
    pub fn delete(self) -> DomainResult<Entity> {
        self.editor()?.delete_by_id(self.entity.id())?;
        let Self { entity, sink, .. } = self;
        debug!("Deleted {} {}", entity.kind(), entity.id());
        sink.publish(EntityEvent::Deleted {
            entity: entity.clone(),
        });
        Ok(entity)
    }

    fn editor(&self) -> DomainResult<&Arc<dyn EntityEditor>> {
        self.editor
            .as_ref()
            .ok_or_else(|| DomainError::ReadOnlyAggregate {
                kind: self.entity.kind(),
                id: self.entity.id().clone(),
            })
    }
}

fn validate(entity: &Entity) -> DomainResult<()> {
    match entity {
        Entity::Observation(o) => {
            if o.datastream.is_none() {
                return Err(DomainError::Validation(
                    "observation requires a datastream reference".into(),
                ));
            }
            if o.feature_of_interest.is_none() {
                return Err(DomainError::Validation(
                    "observation requires a feature-of-interest reference".into(),
                ));
            }
        }
        Entity::Datastream(d) => {
            if d.thing.is_none() || d.sensor.is_none() || d.observed_property.is_none() {
                return Err(DomainError::Validation(
                    "datastream requires thing, sensor and observed-property references".into(),
                ));
            }
        }
        _ => {}
    }
    Ok(())
}
