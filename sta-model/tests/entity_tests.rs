use pretty_assertions::assert_eq;
use serde_json::json;
use sta_model::{Datastream, Entity, EntityKind, Observation, Thing, UnitOfMeasurement};
use sta_types::EntityId;

fn sample_thing() -> Thing {
    Thing {
        id: EntityId::new("thing-1"),
        name: "Weather station".into(),
        description: "Rooftop station".into(),
        properties: Some(json!({"owner": "ops"})),
        party: None,
        locations: vec![],
    }
}

fn sample_datastream() -> Datastream {
    Datastream {
        id: EntityId::new("ds-1"),
        name: "Air temperature".into(),
        description: "2m air temperature".into(),
        observation_type: "Measurement".into(),
        unit_of_measurement: UnitOfMeasurement {
            name: "degree Celsius".into(),
            symbol: "°C".into(),
            definition: "ucum:Cel".into(),
        },
        observed_area: None,
        phenomenon_time: None,
        result_time: None,
        properties: None,
        thing: Some(EntityId::new("thing-1")),
        sensor: Some(EntityId::new("sensor-1")),
        observed_property: Some(EntityId::new("op-1")),
    }
}

#[test]
fn entity_accessors() {
    let e: Entity = sample_thing().into();
    assert_eq!(e.id().as_str(), "thing-1");
    assert_eq!(e.kind(), EntityKind::Thing);
    assert_eq!(e.name(), Some("Weather station"));
}

#[test]
fn observation_has_no_name() {
    let e: Entity = Observation {
        id: EntityId::new("obs-1"),
        phenomenon_time: None,
        result_time: None,
        result: json!(21.5),
        valid_time: None,
        parameters: None,
        datastream: Some(EntityId::new("ds-1")),
        feature_of_interest: Some(EntityId::new("foi-1")),
    }
    .into();
    assert_eq!(e.name(), None);
    assert_eq!(e.kind(), EntityKind::Observation);
}

#[test]
fn entity_serde_is_kind_tagged() {
    let e: Entity = sample_datastream().into();
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["kind"], "Datastream");
    assert_eq!(json["unitOfMeasurement"]["symbol"], "°C");
    let parsed: Entity = serde_json::from_value(json).unwrap();
    assert_eq!(e, parsed);
}

#[test]
fn absent_optionals_are_omitted() {
    let e: Entity = sample_datastream().into();
    let json = serde_json::to_value(&e).unwrap();
    assert!(json.get("observedArea").is_none());
    assert!(json.get("phenomenonTime").is_none());
}

#[test]
fn kind_set_names() {
    assert_eq!(EntityKind::FeatureOfInterest.set_name(), "FeaturesOfInterest");
    assert_eq!(EntityKind::ObservedProperty.set_name(), "ObservedProperties");
    assert!(EntityKind::Party.is_extension());
    assert!(!EntityKind::Observation.is_extension());
}

#[test]
fn unit_dedup_key_includes_name_and_symbol() {
    let unit = sample_datastream().unit_of_measurement;
    assert_eq!(unit.dedup_key(), "degree Celsius:°C:unit");
}
