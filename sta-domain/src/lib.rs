//! Aggregate consistency and change notification for the SensorThings core.
//!
//! This crate owns the write path and its side channel:
//! - [`EntityEditor`]: the narrow persistence contract the engine depends on
//! - [`Aggregate`]: wraps one entity with its editor and event sink; one
//!   persistence call and one event per operation, event strictly after
//!   persistence succeeds
//! - [`compute_difference_map`]: stateless differ producing the set of
//!   semantically changed field names between two snapshots, used for
//!   selective notification payloads (MQTT topic filtering by "what changed")
//! - [`EntityService`]: request-level orchestration of fetch planning,
//!   reads, validation, mutation, and notification
//! - [`LockRegistry`]: per-process named locks guarding find-or-create
//!   sequences against duplicate-row races
//!
//! Everything here runs synchronously on the request thread; transaction
//! boundaries belong to the surrounding framework.

mod aggregate;
mod diff;
mod editor;
mod error;
mod event;
mod lock;
mod memory;
mod service;
mod sink;

pub use aggregate::Aggregate;
pub use diff::compute_difference_map;
pub use editor::{EditorError, EditorResult, EntityEditor};
pub use error::{DomainError, DomainResult};
pub use event::{ChangeSet, EntityEvent};
pub use lock::{LockGuard, LockRegistry};
pub use memory::MemoryStore;
pub use service::EntityService;
pub use sink::{BroadcastSink, BufferSink, EventSink, NullSink};
