//! Differential change computation.
//!
//! Compares an old and a new snapshot of the same entity after an update and
//! returns the canonical names of the fields that changed. The result drives
//! selective notification payloads; it is a best-effort side channel and must
//! never block the write path, so internal failures degrade to a partial
//! change set instead of propagating.

use crate::ChangeSet;
use serde_json::Value;
use sta_model::{fields, Entity};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
enum DiffError {
    #[error("malformed '{field}' value on old snapshot")]
    MalformedValue { field: &'static str },
}

/// Computes the set of changed field names between two snapshots.
///
/// Comparison rules:
/// - a field is reported only when **both** snapshots carry a value and the
///   values differ, so a field absent on the old snapshot is never reported,
///   even if the new snapshot sets it;
/// - composite time windows (phenomenon/result time start+end) collapse to
///   a single tag;
/// - mismatched or extension entity kinds yield an empty set;
/// - an internal comparison failure is logged and whatever was accumulated
///   so far is returned.
#[must_use]
pub fn compute_difference_map(old: &Entity, new: &Entity) -> ChangeSet {
    let mut changed = ChangeSet::new();
    if let Err(err) = compare_into(old, new, &mut changed) {
        warn!(
            "Change diff for {} {} aborted, returning partial change set: {}",
            old.kind(),
            old.id(),
            err
        );
    }
    changed
}

fn compare_into(old: &Entity, new: &Entity, out: &mut ChangeSet) -> Result<(), DiffError> {
    match (old, new) {
        (Entity::Thing(o), Entity::Thing(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            optional(out, fields::PROPERTIES, o.properties.as_ref(), n.properties.as_ref());
        }
        (Entity::Location(o), Entity::Location(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            scalar(out, fields::ENCODING_TYPE, &o.encoding_type, &n.encoding_type);
            geometry(out, fields::LOCATION, Some(&o.location), Some(&n.location))?;
        }
        (Entity::HistoricalLocation(o), Entity::HistoricalLocation(n)) => {
            scalar(out, fields::TIME, &o.time, &n.time);
        }
        (Entity::Datastream(o), Entity::Datastream(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            scalar(out, fields::OBSERVATION_TYPE, &o.observation_type, &n.observation_type);
            scalar(
                out,
                fields::UNIT_OF_MEASUREMENT,
                &o.unit_of_measurement,
                &n.unit_of_measurement,
            );
            optional(out, fields::PROPERTIES, o.properties.as_ref(), n.properties.as_ref());
            // Start/end pairs collapse to one tag each.
            optional(
                out,
                fields::PHENOMENON_TIME,
                o.phenomenon_time.as_ref(),
                n.phenomenon_time.as_ref(),
            );
            optional(out, fields::RESULT_TIME, o.result_time.as_ref(), n.result_time.as_ref());
            geometry(
                out,
                fields::OBSERVED_AREA,
                o.observed_area.as_ref(),
                n.observed_area.as_ref(),
            )?;
        }
        (Entity::Sensor(o), Entity::Sensor(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            scalar(out, fields::ENCODING_TYPE, &o.encoding_type, &n.encoding_type);
            scalar(out, fields::METADATA, &o.metadata, &n.metadata);
        }
        (Entity::ObservedProperty(o), Entity::ObservedProperty(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            scalar(out, fields::DEFINITION, &o.definition, &n.definition);
        }
        (Entity::Observation(o), Entity::Observation(n)) => {
            optional(
                out,
                fields::PHENOMENON_TIME,
                o.phenomenon_time.as_ref(),
                n.phenomenon_time.as_ref(),
            );
            optional(out, fields::RESULT_TIME, o.result_time.as_ref(), n.result_time.as_ref());
            optional(out, fields::VALID_TIME, o.valid_time.as_ref(), n.valid_time.as_ref());
        }
        (Entity::FeatureOfInterest(o), Entity::FeatureOfInterest(n)) => {
            scalar(out, fields::NAME, &o.name, &n.name);
            scalar(out, fields::DESCRIPTION, &o.description, &n.description);
            scalar(out, fields::ENCODING_TYPE, &o.encoding_type, &n.encoding_type);
            geometry(out, fields::FEATURE, Some(&o.feature), Some(&n.feature))?;
        }
        // Mismatched pairs and extension kinds: no tags.
        _ => {}
    }
    Ok(())
}

fn scalar<T: PartialEq>(out: &mut ChangeSet, field: &'static str, old: &T, new: &T) {
    if old != new {
        out.insert(field);
    }
}

/// Old-null asymmetry: both sides must be materialized for a change to
/// register.
fn optional<T: PartialEq>(
    out: &mut ChangeSet,
    field: &'static str,
    old: Option<&T>,
    new: Option<&T>,
) {
    if let (Some(o), Some(n)) = (old, new) {
        if o != n {
            out.insert(field);
        }
    }
}

/// Geometry payloads must be GeoJSON objects; anything else on the old
/// snapshot aborts the diff.
fn geometry(
    out: &mut ChangeSet,
    field: &'static str,
    old: Option<&Value>,
    new: Option<&Value>,
) -> Result<(), DiffError> {
    let (Some(o), Some(n)) = (old, new) else {
        return Ok(());
    };
    if !o.is_object() {
        return Err(DiffError::MalformedValue { field });
    }
    if o != n {
        out.insert(field);
    }
    Ok(())
}
