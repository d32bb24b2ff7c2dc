//! Fetch specifications: deduplicated relation-path token sets and their
//! merged tree form.

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A set of dot-separated relation-path tokens to eagerly fetch with a root
/// entity, e.g. `{"procedure", "procedure.format", "unit"}`.
///
/// Tokens are kept in a sorted set: inserting a token twice is a no-op, and
/// the merged [tree](FetchSpec::tree) is independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchSpec {
    tokens: BTreeSet<String>,
}

impl FetchSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token, validating its syntax.
    ///
    /// Each dot-separated segment must be a non-empty identifier
    /// (`[A-Za-z0-9_]+`). Returns `true` if the token was not already
    /// present.
    pub fn insert(&mut self, token: impl Into<String>) -> Result<bool, GraphError> {
        let token = token.into();
        if !Self::is_valid_token(&token) {
            return Err(GraphError::InvalidPath(token));
        }
        Ok(self.tokens.insert(token))
    }

    /// Inserts a token from a vetted static table.
    pub(crate) fn insert_known(&mut self, token: &'static str) {
        self.tokens.insert(token.to_string());
    }

    /// Unions another spec into this one.
    pub fn merge(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    /// Returns true if the spec carries the exact token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Parses every token into one merged, root-scoped relation tree.
    ///
    /// `{"a", "a.b", "c"}` yields two roots, with `b` nested under `a`.
    /// Merging is idempotent: duplicated prefixes collapse into one node.
    #[must_use]
    pub fn tree(&self) -> BTreeMap<String, FetchNode> {
        let mut roots: BTreeMap<String, FetchNode> = BTreeMap::new();
        for token in &self.tokens {
            let mut level = &mut roots;
            for segment in token.split('.') {
                level = &mut level
                    .entry(segment.to_string())
                    .or_default()
                    .children;
            }
        }
        roots
    }

    fn is_valid_token(token: &str) -> bool {
        !token.is_empty()
            && token.split('.').all(|segment| {
                !segment.is_empty()
                    && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            })
    }
}

impl fmt::Display for FetchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

/// A node in the merged fetch tree; children are keyed by relation segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchNode {
    pub children: BTreeMap<String, FetchNode>,
}

impl FetchNode {
    /// True when the relation is fetched without any nested relations.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
