//! The persistence collaborator contract.

use sta_graph::FetchSpec;
use sta_model::Entity;
use sta_types::EntityId;
use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Backend failure (connection, constraint, transaction).
    #[error("backend error: {0}")]
    Backend(String),

    /// Entity payload could not be (de)serialized by the backend.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No entity with the given identifier.
    #[error("no entity with identifier: {0}")]
    Missing(EntityId),
}

/// The narrow persistence contract the engine depends on.
///
/// Implementations translate fetch specs into whatever eager-loading
/// mechanism the backend has; a backend without one may ignore the spec and
/// load lazily (the plan is a hint, not an obligation).
///
/// All calls are expected to run inside the caller's ambient transaction;
/// the editor itself never commits or rolls back.
pub trait EntityEditor: Send + Sync {
    /// Loads an entity, eagerly materializing the relations in `fetch`.
    fn find_by_id(&self, id: &EntityId, fetch: Option<&FetchSpec>)
        -> EditorResult<Option<Entity>>;

    /// Inserts or updates an entity, returning the persisted version.
    fn save(&self, entity: Entity) -> EditorResult<Entity>;

    /// Deletes by identifier; missing entities are an error.
    fn delete_by_id(&self, id: &EntityId) -> EditorResult<()>;

    /// Existence check by identifier.
    fn exists_by_id(&self, id: &EntityId) -> EditorResult<bool>;
}
