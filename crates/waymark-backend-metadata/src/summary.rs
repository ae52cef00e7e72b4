//! Collection summary: distribution counts over a finished run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use waymark_spec::{CollectionConfig, GeneratedRecord, MemberKind};

/// Version of the draw-ordering contract.
///
/// Bump whenever the order or number of draws per stage changes; outputs from
/// different versions are not comparable.
pub const DRAW_CONTRACT_VERSION: u32 = 1;

/// Score statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

/// Records in one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    pub rank: u32,
    pub name: String,
    pub count: usize,
}

/// Records in one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationCount {
    pub id: u32,
    pub name: String,
    pub count: usize,
    pub hybrids: usize,
}

/// Summary written beside the per-record output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Draw-ordering contract the run followed.
    pub draw_contract_version: u32,
    /// Collection name.
    pub collection_name: String,
    /// Seed the run used.
    pub seed: String,
    /// Number of records.
    pub record_count: usize,
    /// Total values drawn from the stream.
    pub draws: u64,
    /// Score statistics, absent for an empty collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreStats>,
    /// Per-tier counts in tier-table order, including empty tiers.
    pub tiers: Vec<TierCount>,
    /// Per-kind counts keyed by kind label.
    pub member_kinds: BTreeMap<String, usize>,
    /// Per-station counts in station order.
    pub stations: Vec<StationCount>,
    /// Occurrences of each trait, keyed by layer then trait name.
    pub traits: BTreeMap<String, BTreeMap<String, usize>>,
}

impl CollectionSummary {
    /// Records in the tier with the given rank.
    pub fn tier_count(&self, rank: u32) -> usize {
        self.tiers
            .iter()
            .find(|t| t.rank == rank)
            .map_or(0, |t| t.count)
    }

    /// Records of the given kind.
    pub fn kind_count(&self, kind: MemberKind) -> usize {
        self.member_kinds.get(kind.as_str()).copied().unwrap_or(0)
    }
}

/// Builds the summary for a finished run.
pub fn summarize(
    config: &CollectionConfig,
    records: &[GeneratedRecord],
    seed: &str,
    draws: u64,
) -> CollectionSummary {
    let score = score_stats(records);

    let tiers = config
        .tiers
        .iter()
        .map(|tier| TierCount {
            rank: tier.rank,
            name: tier.name.clone(),
            count: records.iter().filter(|r| r.tier_rank == tier.rank).count(),
        })
        .collect();

    let mut member_kinds = BTreeMap::new();
    for kind in MemberKind::append_order() {
        let count = records.iter().filter(|r| r.member_kind == *kind).count();
        member_kinds.insert(kind.as_str().to_string(), count);
    }

    let stations = config
        .stations
        .iter()
        .map(|station| {
            let members = records.iter().filter(|r| r.station.id == station.id);
            let (count, hybrids) = members.fold((0, 0), |(n, h), r| {
                (n + 1, h + usize::from(r.member_kind == MemberKind::Hybrid))
            });
            StationCount {
                id: station.id,
                name: station.name.clone(),
                count,
                hybrids,
            }
        })
        .collect();

    let mut traits: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for layer in &config.layers {
        let counts = traits.entry(layer.name.clone()).or_default();
        for t in &layer.traits {
            counts.insert(t.name.clone(), 0);
        }
    }
    for attr in records.iter().flat_map(|r| &r.attributes) {
        *traits
            .entry(attr.layer.clone())
            .or_default()
            .entry(attr.value.clone())
            .or_default() += 1;
    }

    CollectionSummary {
        draw_contract_version: DRAW_CONTRACT_VERSION,
        collection_name: config.collection.name.clone(),
        seed: seed.to_string(),
        record_count: records.len(),
        draws,
        score,
        tiers,
        member_kinds,
        stations,
        traits,
    }
}

fn score_stats(records: &[GeneratedRecord]) -> Option<ScoreStats> {
    let min = records.iter().map(|r| r.total_score).min()?;
    let max = records.iter().map(|r| r.total_score).max()?;
    let sum: u64 = records.iter().map(|r| u64::from(r.total_score)).sum();
    Some(ScoreStats {
        min,
        max,
        mean: sum as f64 / records.len() as f64,
    })
}
