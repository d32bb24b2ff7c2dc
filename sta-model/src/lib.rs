//! Entity model for the SensorThings core.
//!
//! Defines the typed entity structs (Thing, Location, Datastream, Sensor,
//! Observation, FeatureOfInterest, ObservedProperty, HistoricalLocation and
//! the Party/Project/Group/License/Relation extension types), the [`Entity`]
//! tagged union the rest of the engine dispatches on, and the canonical
//! [`fields`] name table used by change notification.
//!
//! Open-ended payloads (geometry, properties, parameters, observation
//! results, feature geometries) are carried as raw `serde_json::Value`; their
//! structure belongs to the excluded wire layer, not to this core.

mod entity;
pub mod fields;
mod kinds;

pub use entity::{
    Datastream, Entity, FeatureOfInterest, Group, HistoricalLocation, License, Location,
    Observation, ObservedProperty, Party, Project, Relation, Sensor, Thing, UnitOfMeasurement,
};
pub use kinds::EntityKind;
