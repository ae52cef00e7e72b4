//! Per-station allocation spec types.

use serde::{Deserialize, Serialize};

/// Tolerance when checking that a group's ratios match its majority share.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// The three member kinds a blueprint can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Majority kind A.
    Human,
    /// Majority kind B.
    Creature,
    /// Minority kind, only present through an explicit override.
    Hybrid,
}

impl MemberKind {
    /// Returns the kind label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Human => "Human",
            MemberKind::Creature => "Creature",
            MemberKind::Hybrid => "Hybrid",
        }
    }

    /// Returns all kinds in allocation append order (minority first).
    pub fn append_order() -> &'static [MemberKind] {
        &[MemberKind::Hybrid, MemberKind::Human, MemberKind::Creature]
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declarative allocation for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    /// Station id this group populates.
    pub station: u32,
    /// Total members in this station.
    pub count: u32,
    /// Share of `count` that is Human.
    pub human_ratio: f64,
    /// Share of `count` that is Creature.
    pub creature_ratio: f64,
    /// Exact number of Hybrid members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_count: Option<u32>,
}

impl GroupSpec {
    /// Creates a group with no hybrid override.
    pub fn new(station: u32, count: u32, human_ratio: f64, creature_ratio: f64) -> Self {
        Self {
            station,
            count,
            human_ratio,
            creature_ratio,
            hybrid_count: None,
        }
    }

    /// Sets the hybrid override.
    pub fn with_hybrids(mut self, hybrid_count: u32) -> Self {
        self.hybrid_count = Some(hybrid_count);
        self
    }

    /// Hybrid members in this group (0 without an override).
    pub fn hybrids(&self) -> u32 {
        self.hybrid_count.unwrap_or(0)
    }

    /// Share of `count` the two majority ratios are expected to sum to.
    pub fn expected_majority_share(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        f64::from(self.count.saturating_sub(self.hybrids())) / f64::from(self.count)
    }
}

/// Ordered group list for the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocationSpec {
    /// One group per station, in declared order.
    pub groups: Vec<GroupSpec>,
}

impl AllocationSpec {
    /// Sum of all group counts.
    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.count)).sum()
    }

    /// Sum of all hybrid overrides.
    pub fn total_hybrids(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.hybrids())).sum()
    }
}
