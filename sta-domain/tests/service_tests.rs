mod common;

use common::*;
use pretty_assertions::assert_eq;
use sta_domain::{
    BufferSink, DomainError, EntityEvent, EntityService, EntityEditor, MemoryStore,
};
use sta_graph::{ExpandDirective, QueryOptions};
use sta_model::{Entity, EntityKind};
use sta_types::EntityId;
use std::sync::Arc;

fn service() -> (EntityService, Arc<MemoryStore>, Arc<BufferSink>) {
    let store = Arc::new(MemoryStore::new());
    let sink = Arc::new(BufferSink::new());
    let service = EntityService::new(store.clone(), sink.clone());
    (service, store, sink)
}

// ── Reads ────────────────────────────────────────────────────────

#[test]
fn get_returns_stored_entity() {
    let (service, store, _) = service();
    store.save(thing("t").into()).unwrap();

    let found = service
        .get(EntityKind::Thing, &EntityId::new("t"), None)
        .unwrap();
    assert_eq!(found.unwrap().id().as_str(), "t");
}

#[test]
fn get_with_flat_expand() {
    let (service, store, _) = service();
    store.save(datastream("d").into()).unwrap();

    let found = service
        .get(
            EntityKind::Datastream,
            &EntityId::new("d"),
            Some(&ExpandDirective::new("Sensor")),
        )
        .unwrap();
    assert!(found.is_some());
}

#[test]
fn get_with_unknown_expand_is_invalid() {
    let (service, store, _) = service();
    store.save(datastream("d").into()).unwrap();

    let err = service
        .get(
            EntityKind::Datastream,
            &EntityId::new("d"),
            Some(&ExpandDirective::new("Bogus")),
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidExpand(_)));
    assert!(err.is_client_error());
}

#[test]
fn get_with_deep_expand_still_reads() {
    let (service, store, _) = service();
    store.save(datastream("d").into()).unwrap();

    let directive = ExpandDirective::new("Observations").with_options(QueryOptions {
        filter: true,
        ..QueryOptions::default()
    });
    let found = service
        .get(EntityKind::Datastream, &EntityId::new("d"), Some(&directive))
        .unwrap();
    assert!(found.is_some());
}

#[test]
fn get_filters_kind_mismatch() {
    let (service, store, _) = service();
    store.save(sensor("x").into()).unwrap();

    let found = service.get(EntityKind::Thing, &EntityId::new("x"), None).unwrap();
    assert!(found.is_none());
}

// ── Writes ───────────────────────────────────────────────────────

#[test]
fn create_then_update_then_delete_event_stream() {
    let (service, _, sink) = service();

    service.create(thing("t").into()).unwrap();
    let mut renamed = thing("t");
    renamed.name = "Relocated station".into();
    service.update(renamed.into()).unwrap();
    service.delete(&EntityId::new("t")).unwrap();

    let events = sink.drain();
    assert_eq!(events.len(), 3);
    assert!(events[0].is_creation());
    match &events[1] {
        EntityEvent::Saved { old, changed, .. } => {
            assert!(old.is_some());
            assert_eq!(changed.iter().collect::<Vec<_>>(), vec!["name"]);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(events[2], EntityEvent::Deleted { .. }));
}

#[test]
fn update_missing_entity_is_not_found() {
    let (service, _, sink) = service();
    let err = service.update(thing("ghost").into()).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(sink.is_empty());
}

#[test]
fn delete_missing_entity_is_not_found() {
    let (service, _, sink) = service();
    let err = service.delete(&EntityId::new("ghost")).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(sink.is_empty());
}

#[test]
fn create_invalid_observation_is_rejected() {
    let (service, store, sink) = service();
    let mut obs = observation("o");
    obs.datastream = None;

    let err = service.create(obs.into()).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(store.is_empty());
    assert!(sink.is_empty());
}

// ── Find-or-create ───────────────────────────────────────────────

#[test]
fn find_or_create_creates_when_absent() {
    let (service, store, sink) = service();
    let unit_key = unit().dedup_key();

    let created = service
        .find_or_create(&unit_key, datastream("d").into())
        .unwrap();
    assert_eq!(created.id().as_str(), "d");
    assert!(store.exists_by_id(created.id()).unwrap());
    assert_eq!(sink.drain().len(), 1);
}

#[test]
fn find_or_create_returns_existing_without_event() {
    let (service, store, sink) = service();
    let existing: Entity = datastream("d").into();
    store.save(existing.clone()).unwrap();

    let mut candidate = datastream("d");
    candidate.name = "Would-be duplicate".into();
    let found = service
        .find_or_create("ds-key", candidate.into())
        .unwrap();

    // The stored entity wins; nothing is written or published.
    assert_eq!(found, existing);
    assert!(sink.is_empty());
}

#[test]
fn find_or_create_serializes_on_key() {
    use std::thread;

    let store = Arc::new(MemoryStore::new());
    let sink = Arc::new(BufferSink::new());
    let service = Arc::new(EntityService::new(store.clone(), sink.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(thread::spawn(move || {
            service.find_or_create("same-key", datastream("d").into())
        }));
    }
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // Exactly one creation happened; everyone else found it.
    assert_eq!(store.len(), 1);
    assert_eq!(sink.drain().len(), 1);
}
