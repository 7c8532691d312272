//! Merging of observations from both sources into the report aggregate.
//!
//! Pure functions: life-list filtering happens before any counting, and the
//! aggregate is keyed by (report date key, scientific name) with per
//! (location, source) counts underneath.

use std::collections::{BTreeMap, HashSet};

use birdscout_common::types::{GeoPoint, Observation, SourceTag};

/// Count for one (location, source) pair, with coordinates when either
/// source supplied them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCount {
    pub count: u32,
    pub point: Option<GeoPoint>,
}

/// Everything aggregated for one (date, species) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateEntry {
    /// Common name as first observed, the fallback when the translation
    /// table has no entry.
    pub observed_name: String,
    pub total: u32,
    pub locations: BTreeMap<(String, SourceTag), LocationCount>,
}

/// Report aggregate: date key → scientific name → entry. BTreeMaps keep
/// both levels sorted for deterministic rendering.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub by_date: BTreeMap<String, BTreeMap<String, AggregateEntry>>,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Counters produced by an aggregation run.
#[derive(Debug, Default, PartialEq)]
pub struct AggregateStats {
    pub accepted: u32,
    pub excluded: u32,
}

/// Fold observations into the aggregate, excluding life-list species.
///
/// Species with an empty scientific name are excluded as well since they
/// cannot be checked against the life list.
pub fn build(
    observations: Vec<Observation>,
    life_list: &HashSet<String>,
) -> (Aggregate, AggregateStats) {
    let mut aggregate = Aggregate::default();
    let mut stats = AggregateStats::default();

    for obs in observations {
        if obs.scientific.is_empty() || life_list.contains(&obs.scientific) {
            stats.excluded += 1;
            continue;
        }
        stats.accepted += 1;

        let entry = aggregate
            .by_date
            .entry(obs.date_key)
            .or_default()
            .entry(obs.scientific)
            .or_default();

        if entry.observed_name.is_empty() {
            entry.observed_name = obs.observed_name;
        }
        entry.total += obs.count;

        let loc = entry
            .locations
            .entry((obs.location, obs.source))
            .or_default();
        loc.count += obs.count;
        if loc.point.is_none() {
            loc.point = obs.point;
        }
    }

    (aggregate, stats)
}
