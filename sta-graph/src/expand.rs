//! Expand directives as parsed from request query options.

use serde::{Deserialize, Serialize};

/// Presence flags for the nested query options of an expand directive.
///
/// The core never interprets option *content*; it only needs to know which
/// options exist to decide whether the expand can be folded into the eager
/// fetch plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub filter: bool,
    pub expand: bool,
    pub top: bool,
    pub orderby: bool,
    pub select: bool,
    pub count: bool,
}

impl QueryOptions {
    /// True when the expanded collection must be loaded by its own
    /// per-item queries instead of the shared eager fetch.
    ///
    /// Nested `$top`/`$orderby`/`$select`/`$count` do not disqualify the
    /// eager path; only options that change *which* children are loaded do.
    #[must_use]
    pub const fn requires_item_queries(&self) -> bool {
        self.filter || self.expand
    }
}

/// A single parsed `$expand` directive: one target relation plus the
/// presence flags of its nested options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandDirective {
    /// Public STA relation name, e.g. `Sensor`, `Observations`.
    pub target: String,
    #[serde(default)]
    pub options: QueryOptions,
}

impl ExpandDirective {
    /// Creates a flat directive with no nested options.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            options: QueryOptions::default(),
        }
    }

    /// Attaches nested-option presence flags.
    #[must_use]
    pub const fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}
