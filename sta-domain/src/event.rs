//! Domain events and change sets.

use serde::{Deserialize, Serialize};
use sta_model::{Entity, EntityKind};
use sta_types::EntityId;
use std::collections::BTreeSet;
use std::fmt;

/// The set of canonical field names that differ between two versions of the
/// same entity.
///
/// Field names come from [`sta_model::fields`]; the set is sorted so the
/// rendered form is stable for topic matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet(BTreeSet<String>);

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a changed field.
    pub fn insert(&mut self, field: impl Into<String>) {
        self.0.insert(field.into());
    }

    /// Returns true if the field is recorded as changed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    /// Number of changed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the changed field names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined field list, as used by notification topic filters.
    #[must_use]
    pub fn to_field_list(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field_list())
    }
}

/// A change notification emitted after a successful aggregate operation.
///
/// `Saved` covers both creation (`old == None`, empty change set) and
/// update (`old` present, change set from the differ). Serializable so a
/// dispatcher can hand it straight to a broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EntityEvent {
    Saved {
        old: Option<Entity>,
        new: Entity,
        changed: ChangeSet,
    },
    Deleted {
        entity: Entity,
    },
}

impl EntityEvent {
    /// The entity the event is about (the new version for saves).
    #[must_use]
    pub const fn entity(&self) -> &Entity {
        match self {
            Self::Saved { new, .. } => new,
            Self::Deleted { entity } => entity,
        }
    }

    /// Identifier of the affected entity.
    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        self.entity().id()
    }

    /// Kind of the affected entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.entity().kind()
    }

    /// True for the creation flavour of `Saved`.
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        matches!(self, Self::Saved { old: None, .. })
    }
}
