//! Fetch-plan construction.
//!
//! Answers one question per read request: *which related data must this
//! entity carry when it is returned?* The answer is a [`FetchSpec`], a
//! deduplicated set of relation-path tokens the persistence collaborator
//! turns into eager joins.
//!
//! [`GraphBuilder`] merges two sources of tokens:
//! - a fixed per-kind **baseline** (relations always rendered in output,
//!   cheap to join, e.g. a datastream's unit and observation-type format),
//! - tokens contributed by the request's `$expand` directive, looked up in a
//!   static per-kind expansion table.
//!
//! Only "flat" expands are folded into the plan. A directive carrying a
//! nested `$filter` or `$expand` is skipped: the child collection needs its
//! own filtered/paginated query and is loaded per item later.
//!
//! Tokens speak the storage schema's relation vocabulary (`procedure`,
//! `platform`, `phenomenon`, `dataset`), which differs from the public STA
//! names; the expansion tables are the translation layer.

mod builder;
mod error;
mod expand;
mod spec;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use expand::{ExpandDirective, QueryOptions};
pub use spec::{FetchNode, FetchSpec};
