//! Entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every entity type the engine knows about.
///
/// The first eight are the SensorThings standard set; the remainder are the
/// STAplus extension types. Change notification only tracks the standard
/// set; extension kinds diff to an empty change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
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
}

impl EntityKind {
    /// The public collection name used in request paths and topics
    /// (e.g. `Datastreams`, `FeaturesOfInterest`).
    #[must_use]
    pub const fn set_name(&self) -> &'static str {
        match self {
            Self::Thing => "Things",
            Self::Location => "Locations",
            Self::HistoricalLocation => "HistoricalLocations",
            Self::Datastream => "Datastreams",
            Self::Sensor => "Sensors",
            Self::ObservedProperty => "ObservedProperties",
            Self::Observation => "Observations",
            Self::FeatureOfInterest => "FeaturesOfInterest",
            Self::Party => "Parties",
            Self::Project => "Projects",
            Self::Group => "Groups",
            Self::License => "Licenses",
            Self::Relation => "Relations",
        }
    }

    /// Returns true for the STAplus extension kinds.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        matches!(
            self,
            Self::Party | Self::Project | Self::Group | Self::License | Self::Relation
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.set_name())
    }
}
