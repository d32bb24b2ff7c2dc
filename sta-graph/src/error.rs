//! Errors raised during fetch-plan construction.

use sta_model::EntityKind;
use thiserror::Error;

/// Errors that can occur while building a fetch plan.
///
/// Both variants are client-facing bad-request conditions, never server
/// faults: the request named a relation or path the entity type does not
/// have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The `$expand` target is not a relation of the entity type.
    #[error("{kind} has no expandable relation named '{relation}'")]
    InvalidExpand {
        kind: EntityKind,
        relation: String,
    },

    /// A relation-path token is syntactically invalid.
    #[error("invalid fetch path: '{0}'")]
    InvalidPath(String),
}
