//! Shared fixtures for domain tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use sta_model::{
    Datastream, FeatureOfInterest, Location, Observation, Sensor, Thing, UnitOfMeasurement,
};
use sta_types::{EntityId, TimeInterval};

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn interval(start: i64, end: i64) -> TimeInterval {
    TimeInterval::new(at(start), at(end))
}

pub fn thing(id: &str) -> Thing {
    Thing {
        id: EntityId::new(id),
        name: "Weather station".into(),
        description: "Rooftop station".into(),
        properties: None,
        party: None,
        locations: vec![],
    }
}

pub fn location(id: &str) -> Location {
    Location {
        id: EntityId::new(id),
        name: "Rooftop".into(),
        description: "North-east corner".into(),
        encoding_type: "application/geo+json".into(),
        location: json!({"type": "Point", "coordinates": [7.82, 52.05]}),
        things: vec![],
    }
}

pub fn sensor(id: &str) -> Sensor {
    Sensor {
        id: EntityId::new(id),
        name: "DHT22".into(),
        description: "Temperature/humidity sensor".into(),
        encoding_type: "application/pdf".into(),
        metadata: "https://example.org/dht22.pdf".into(),
    }
}

pub fn unit() -> UnitOfMeasurement {
    UnitOfMeasurement {
        name: "degree Celsius".into(),
        symbol: "°C".into(),
        definition: "ucum:Cel".into(),
    }
}

pub fn datastream(id: &str) -> Datastream {
    Datastream {
        id: EntityId::new(id),
        name: "Air temperature".into(),
        description: "2m air temperature".into(),
        observation_type: "Measurement".into(),
        unit_of_measurement: unit(),
        observed_area: None,
        phenomenon_time: Some(interval(100, 200)),
        result_time: Some(interval(100, 200)),
        properties: None,
        thing: Some(EntityId::new("thing-1")),
        sensor: Some(EntityId::new("sensor-1")),
        observed_property: Some(EntityId::new("op-1")),
    }
}

pub fn feature(id: &str) -> FeatureOfInterest {
    FeatureOfInterest {
        id: EntityId::new(id),
        name: "Sampling point".into(),
        description: "Rooftop air".into(),
        encoding_type: "application/geo+json".into(),
        feature: json!({"type": "Point", "coordinates": [7.82, 52.05]}),
    }
}

pub fn observation(id: &str) -> Observation {
    Observation {
        id: EntityId::new(id),
        phenomenon_time: Some(TimeInterval::instant(at(150))),
        result_time: Some(at(150)),
        result: json!(21.5),
        valid_time: None,
        parameters: None,
        datastream: Some(EntityId::new("ds-1")),
        feature_of_interest: Some(EntityId::new("foi-1")),
    }
}
