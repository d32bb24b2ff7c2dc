//! Error taxonomy for the domain layer.

use crate::EditorError;
use sta_graph::GraphError;
use sta_model::EntityKind;
use sta_types::EntityId;
use thiserror::Error;

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors that can occur in aggregate and service operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Mutation attempted on an aggregate with no editor bound.
    ///
    /// This is a wiring mistake in the calling code, never a user error.
    #[error("aggregate for {kind} '{id}' has no editor bound and is read-only")]
    ReadOnlyAggregate { kind: EntityKind, id: EntityId },

    /// The entity violates a construction invariant (e.g. an observation
    /// without a datastream reference). Rejected before any I/O.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request named an unknown expand relation.
    #[error(transparent)]
    InvalidExpand(#[from] GraphError),

    /// The addressed entity does not exist.
    #[error("entity not found: {0}")]
    NotFound(EntityId),

    /// The persistence backend failed; wrapped and propagated, no retry.
    #[error("persistence failure: {0}")]
    Persistence(#[from] EditorError),
}

impl DomainError {
    /// True for conditions the caller should surface as a bad request
    /// rather than a server fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidExpand(_) | Self::NotFound(_)
        )
    }
}
