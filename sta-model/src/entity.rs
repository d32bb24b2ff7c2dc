//! Typed entity structs and the [`Entity`] tagged union.
//!
//! Relation references are carried as plain [`EntityId`]s. Mandatory
//! relations (an Observation's datastream and feature, a Datastream's thing,
//! sensor and observed property) are still `Option` here because snapshots
//! may come from partial fetch plans; presence is enforced by the aggregate
//! layer before any write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sta_types::{EntityId, TimeInterval};

use crate::EntityKind;

/// Unit of measurement attached to a datastream (UCUM-style descriptor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasurement {
    pub name: String,
    pub symbol: String,
    pub definition: String,
}

impl UnitOfMeasurement {
    /// Business key used for find-or-create deduplication.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}:{}:unit", self.name, self.symbol)
    }
}

/// A thing/platform hosting datastreams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<EntityId>,
}

/// A location, with a GeoJSON geometry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub encoding_type: String,
    /// GeoJSON geometry object.
    pub location: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub things: Vec<EntityId>,
}

/// A thing's location at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalLocation {
    pub id: EntityId,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thing: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<EntityId>,
}

/// A sensor/procedure producing observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub encoding_type: String,
    pub metadata: String,
}

/// An observed property (phenomenon), identified by a definition URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedProperty {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub definition: String,
}

/// A series of observations of one property by one sensor on one thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastream {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub observation_type: String,
    pub unit_of_measurement: UnitOfMeasurement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_area: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenomenon_time: Option<TimeInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_time: Option<TimeInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thing: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_property: Option<EntityId>,
}

/// A single observation/data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenomenon_time: Option<TimeInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_time: Option<DateTime<Utc>>,
    pub result: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time: Option<TimeInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastream: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_of_interest: Option<EntityId>,
}

/// The real-world feature an observation applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOfInterest {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub encoding_type: String,
    /// GeoJSON feature geometry.
    pub feature: Value,
}

// ── STAplus extension types ──────────────────────────────────────

/// A party (person or organisation) owning things and datastreams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: EntityId,
    pub auth_id: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A project grouping datastreams for a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<TimeInterval>,
}

/// A free-form group of related entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// A data license attached to datastreams or groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: EntityId,
    pub name: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A subject/object relation between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: EntityId,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<EntityId>,
}

/// Any entity the engine can persist, fetch-plan, or notify about.
///
/// Internally tagged so serialized events carry the kind alongside the
/// entity payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Entity {
    Thing(Thing),
    Location(Location),
    HistoricalLocation(HistoricalLocation),
    Datastream(Datastream),
    Sensor(Sensor),
    ObservedProperty(ObservedProperty),
    Observation(Observation),
    FeatureOfInterest(FeatureOfInterest),
    Party(Party),
    Project(Project),
    Group(Group),
    License(License),
    Relation(Relation),
}

impl Entity {
    /// The entity's stable identifier.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Thing(e) => &e.id,
            Self::Location(e) => &e.id,
            Self::HistoricalLocation(e) => &e.id,
            Self::Datastream(e) => &e.id,
            Self::Sensor(e) => &e.id,
            Self::ObservedProperty(e) => &e.id,
            Self::Observation(e) => &e.id,
            Self::FeatureOfInterest(e) => &e.id,
            Self::Party(e) => &e.id,
            Self::Project(e) => &e.id,
            Self::Group(e) => &e.id,
            Self::License(e) => &e.id,
            Self::Relation(e) => &e.id,
        }
    }

    /// The entity's kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Thing(_) => EntityKind::Thing,
            Self::Location(_) => EntityKind::Location,
            Self::HistoricalLocation(_) => EntityKind::HistoricalLocation,
            Self::Datastream(_) => EntityKind::Datastream,
            Self::Sensor(_) => EntityKind::Sensor,
            Self::ObservedProperty(_) => EntityKind::ObservedProperty,
            Self::Observation(_) => EntityKind::Observation,
            Self::FeatureOfInterest(_) => EntityKind::FeatureOfInterest,
            Self::Party(_) => EntityKind::Party,
            Self::Project(_) => EntityKind::Project,
            Self::Group(_) => EntityKind::Group,
            Self::License(_) => EntityKind::License,
            Self::Relation(_) => EntityKind::Relation,
        }
    }

    /// The entity's display name, for kinds that have one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Thing(e) => Some(&e.name),
            Self::Location(e) => Some(&e.name),
            Self::Datastream(e) => Some(&e.name),
            Self::Sensor(e) => Some(&e.name),
            Self::ObservedProperty(e) => Some(&e.name),
            Self::FeatureOfInterest(e) => Some(&e.name),
            Self::Project(e) => Some(&e.name),
            Self::Group(e) => Some(&e.name),
            Self::License(e) => Some(&e.name),
            Self::HistoricalLocation(_)
            | Self::Observation(_)
            | Self::Party(_)
            | Self::Relation(_) => None,
        }
    }
}

macro_rules! entity_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Entity {
                fn from(e: $variant) -> Self {
                    Self::$variant(e)
                }
            }
        )+
    };
}

entity_from!(
    Thing,
    Location,
    HistoricalLocation,
    Datastream,
    Sensor,
    ObservedProperty,
    Observation,
    FeatureOfInterest,
    Party,
    Project,
    Group,
    License,
    Relation,
);
