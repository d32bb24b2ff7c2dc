//! Core type definitions for the SensorThings entity engine.
//!
//! This crate defines the primitives shared by every other crate:
//! - [`EntityId`]: stable string identifier for any entity
//! - [`TimeInterval`]: half-open time window used for phenomenon/result/valid times
//!
//! Entity structs, fetch planning, and mutation logic live in the crates
//! layered on top; nothing domain-specific belongs here.

mod ids;
mod time;

pub use ids::EntityId;
pub use time::TimeInterval;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid entity identifier: {0}")]
    InvalidId(String),

    #[error("invalid time interval: {0}")]
    InvalidInterval(String),
}
