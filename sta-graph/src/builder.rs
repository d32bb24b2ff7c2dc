//! The per-request fetch-plan builder and its per-kind configuration tables.

use crate::{ExpandDirective, FetchSpec, GraphError};
use sta_model::EntityKind;
use std::collections::BTreeSet;
use tracing::debug;

/// Static fetch configuration for one entity kind.
///
/// `baseline` tokens are fetched on every read of the kind; `expansions`
/// maps a public `$expand` target to the storage-schema tokens it
/// contributes. An entry with an empty token list marks a relation that is
/// valid to expand but always loaded by its own paged query (observation
/// collections and the like).
struct GraphConfig {
    baseline: &'static [&'static str],
    expansions: &'static [(&'static str, &'static [&'static str])],
}

static THING: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[
        ("Locations", &["locations"]),
        ("HistoricalLocations", &[]),
        ("Datastreams", &[]),
        ("Party", &["party"]),
    ],
};

static LOCATION: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Things", &["platforms"]), ("HistoricalLocations", &[])],
};

static HISTORICAL_LOCATION: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Thing", &["platform"]), ("Locations", &["locations"])],
};

static DATASTREAM: GraphConfig = GraphConfig {
    baseline: &["parameters", "format", "unit"],
    expansions: &[
        ("Sensor", &["procedure", "procedure.format"]),
        ("Thing", &["platform"]),
        ("ObservedProperty", &["phenomenon"]),
        ("Observations", &[]),
        ("Party", &["party"]),
        ("Project", &["project"]),
        ("License", &["license"]),
    ],
};

static SENSOR: GraphConfig = GraphConfig {
    baseline: &["format"],
    expansions: &[("Datastreams", &[])],
};

static OBSERVED_PROPERTY: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Datastreams", &[])],
};

static OBSERVATION: GraphConfig = GraphConfig {
    baseline: &["parameters"],
    expansions: &[
        ("Datastream", &["dataset", "dataset.unit"]),
        ("FeatureOfInterest", &["feature"]),
    ],
};

static FEATURE_OF_INTEREST: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Observations", &[])],
};

static PARTY: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Things", &[]), ("Datastreams", &[])],
};

static PROJECT: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Datastreams", &[])],
};

static GROUP: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Relations", &[])],
};

static LICENSE: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Datastreams", &[])],
};

static RELATION: GraphConfig = GraphConfig {
    baseline: &[],
    expansions: &[("Subject", &["subject"]), ("Object", &["object"])],
};

const fn config_for(kind: EntityKind) -> &'static GraphConfig {
    match kind {
        EntityKind::Thing => &THING,
        EntityKind::Location => &LOCATION,
        EntityKind::HistoricalLocation => &HISTORICAL_LOCATION,
        EntityKind::Datastream => &DATASTREAM,
        EntityKind::Sensor => &SENSOR,
        EntityKind::ObservedProperty => &OBSERVED_PROPERTY,
        EntityKind::Observation => &OBSERVATION,
        EntityKind::FeatureOfInterest => &FEATURE_OF_INTEREST,
        EntityKind::Party => &PARTY,
        EntityKind::Project => &PROJECT,
        EntityKind::Group => &GROUP,
        EntityKind::License => &LICENSE,
        EntityKind::Relation => &RELATION,
    }
}

/// Builds one merged [`FetchSpec`] for a read of a given entity kind.
///
/// One builder per request. The builder is seeded with the kind's baseline
/// tokens; at most one `$expand` directive per navigation target is then
/// folded in via [`add_expand`](GraphBuilder::add_expand).
#[derive(Debug)]
pub struct GraphBuilder {
    kind: EntityKind,
    tokens: BTreeSet<&'static str>,
}

impl GraphBuilder {
    /// Creates a builder for the kind, pre-registering its baseline tokens.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        let mut tokens = BTreeSet::new();
        tokens.extend(config_for(kind).baseline.iter().copied());
        Self { kind, tokens }
    }

    /// The kind this builder plans for.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Folds an expand directive into the plan.
    ///
    /// A directive with nested `$filter`/`$expand` is skipped without
    /// contributing tokens: its collection needs an independent filtered
    /// query. A flat directive whose target is unknown for this kind is a
    /// client error. Re-adding the same directive is a no-op.
    pub fn add_expand(&mut self, directive: &ExpandDirective) -> Result<(), GraphError> {
        if directive.options.requires_item_queries() {
            debug!(
                "Expand of {} on {} carries nested options, deferring to per-item queries",
                directive.target, self.kind
            );
            return Ok(());
        }

        let config = config_for(self.kind);
        let tokens = config
            .expansions
            .iter()
            .find(|(name, _)| *name == directive.target)
            .map(|(_, tokens)| *tokens)
            .ok_or_else(|| GraphError::InvalidExpand {
                kind: self.kind,
                relation: directive.target.clone(),
            })?;

        self.tokens.extend(tokens.iter().copied());
        Ok(())
    }

    /// Returns the merged fetch spec, or `None` when no tokens were ever
    /// registered; the caller should fall back to default lazy loading.
    #[must_use]
    pub fn build(&self) -> Option<FetchSpec> {
        if self.tokens.is_empty() {
            return None;
        }
        let mut spec = FetchSpec::new();
        for token in &self.tokens {
            spec.insert_known(token);
        }
        Some(spec)
    }
}
