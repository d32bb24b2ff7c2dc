//! Per-process named locks.
//!
//! Find-or-create sequences (unit-of-measurement dedup, datastream
//! creation) race under concurrent requests for logically identical
//! resources. A named lock keyed by the business identifier serializes them
//! within this process. It offers no cross-instance safety; horizontally
//! scaled deployments must back this with a database uniqueness constraint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of named locks. Lock cells are created on first use and kept
/// for the registry's lifetime.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// RAII guard for one named critical section.
#[derive(Debug)]
pub struct LockGuard {
    _guard: OwnedMutexGuard<()>,
}

impl LockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the critical section for `key`, blocking until it is free.
    ///
    /// Synchronous call sites only; must not be called from an async
    /// executor thread.
    #[must_use]
    pub fn guard(&self, key: &str) -> LockGuard {
        let cell = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.to_string())
            .or_default()
            .clone();
        LockGuard {
            _guard: cell.blocking_lock_owned(),
        }
    }

    /// Number of distinct keys ever locked.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
