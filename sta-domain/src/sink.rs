//! Event sinks.
//!
//! A sink receives one [`EntityEvent`] per successful aggregate operation.
//! Delivery is best-effort: sinks never propagate failures back into the
//! write path.

use crate::EntityEvent;
use std::sync::{Mutex, PoisonError};
use tokio::sync::broadcast;
use tracing::debug;

/// Receives domain events emitted by aggregates.
pub trait EventSink: Send + Sync {
    /// Publishes one event. Must not fail; delivery problems are the
    /// sink's own concern.
    fn publish(&self, event: EntityEvent);
}

/// Discards every event. Useful when notification is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: EntityEvent) {}
}

/// Collects events in memory until drained.
///
/// Used by deep-insert orchestration to hold events back until the whole
/// entity graph has persisted, and by tests to assert on emissions.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<EntityEvent>>,
}

impl BufferSink {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all buffered events in publish order.
    #[must_use]
    pub fn drain(&self) -> Vec<EntityEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EntityEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for BufferSink {
    fn publish(&self, event: EntityEvent) {
        self.lock().push(event);
    }
}

/// Fans events out to broadcast subscribers (the MQTT dispatcher and any
/// other in-process listeners).
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<EntityEvent>,
}

impl BroadcastSink {
    /// Creates a sink with the given channel capacity.
    ///
    /// Slow subscribers that fall more than `capacity` events behind skip
    /// ahead and observe a lag error on their receiver.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribes a new receiver to all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EntityEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl EventSink for BroadcastSink {
    fn publish(&self, event: EntityEvent) {
        if self.tx.send(event).is_err() {
            debug!("no subscribers, dropping entity event");
        }
    }
}
