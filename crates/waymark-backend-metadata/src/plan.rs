//! Allocation planner: exact per-kind member counts for every station.

use serde::Serialize;
use tracing::debug;
use waymark_spec::validation::validate_allocation;
use waymark_spec::{AllocationSpec, GroupSpec, MemberKind, Station};

use crate::error::GenerateError;

/// Number of members of one kind in a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCount {
    /// Member kind.
    pub kind: MemberKind,
    /// Exact member count.
    pub count: u32,
}

/// Exact allocation for one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPlan {
    /// Station id.
    pub station: u32,
    /// Per-kind counts in append order (Hybrid, Human, Creature).
    pub entries: Vec<KindCount>,
}

impl StationPlan {
    /// Total members in the station.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Members of `kind` in the station.
    pub fn count(&self, kind: MemberKind) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.count)
            .sum()
    }
}

/// Exact allocation for the whole collection, in declared group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPlan {
    /// One plan per allocation group.
    pub stations: Vec<StationPlan>,
}

impl AllocationPlan {
    /// Total members across all stations.
    pub fn total(&self) -> u32 {
        self.stations.iter().map(StationPlan::total).sum()
    }

    /// Members of `kind` across all stations.
    pub fn count(&self, kind: MemberKind) -> u32 {
        self.stations.iter().map(|s| s.count(kind)).sum()
    }

    /// Finds the plan for a station id.
    pub fn station(&self, id: u32) -> Option<&StationPlan> {
        self.stations.iter().find(|s| s.station == id)
    }
}

/// Splits one group into exact Hybrid, Human and Creature counts.
///
/// `hybrid` is the override (or 0), `human = round(remaining * human_ratio)`
/// rounded half away from zero, and `creature` takes whatever is left so the
/// three always sum to `count`.
///
/// ```
/// use waymark_backend_metadata::plan::split_group;
/// use waymark_spec::{GroupSpec, MemberKind};
///
/// let plan = split_group(&GroupSpec::new(9, 27, 0.5, 0.5)).unwrap();
/// assert_eq!(plan.count(MemberKind::Human), 14);
/// assert_eq!(plan.count(MemberKind::Creature), 13);
/// ```
pub fn split_group(group: &GroupSpec) -> Result<StationPlan, GenerateError> {
    let hybrid = group.hybrids();
    let remaining = group
        .count
        .checked_sub(hybrid)
        .ok_or_else(|| GenerateError::InvalidAllocation {
            station: group.station,
            reason: format!(
                "hybrid_count {} exceeds group count {}",
                hybrid, group.count
            ),
        })?;

    let human = (f64::from(remaining) * group.human_ratio).round();
    if !human.is_finite() || human < 0.0 || human > f64::from(remaining) {
        return Err(GenerateError::InvalidAllocation {
            station: group.station,
            reason: format!(
                "human_ratio {} does not fit {} remaining members",
                group.human_ratio, remaining
            ),
        });
    }
    let human = human as u32;
    let creature = remaining - human;

    let entries = MemberKind::append_order()
        .iter()
        .map(|&kind| KindCount {
            kind,
            count: match kind {
                MemberKind::Hybrid => hybrid,
                MemberKind::Human => human,
                MemberKind::Creature => creature,
            },
        })
        .collect();

    Ok(StationPlan {
        station: group.station,
        entries,
    })
}

/// Validates an allocation spec and computes the exact plan.
///
/// Any validation error is fatal; no group is adjusted to make totals fit.
pub fn plan_allocation(
    spec: &AllocationSpec,
    collection_size: u32,
    stations: &[Station],
) -> Result<AllocationPlan, GenerateError> {
    let errors = validate_allocation(spec, collection_size, stations);
    if let Some(err) = GenerateError::from_validation(errors) {
        return Err(err);
    }

    let stations = spec
        .groups
        .iter()
        .map(split_group)
        .collect::<Result<Vec<_>, _>>()?;
    let plan = AllocationPlan { stations };

    debug!(
        total = plan.total(),
        hybrids = plan.count(MemberKind::Hybrid),
        humans = plan.count(MemberKind::Human),
        creatures = plan.count(MemberKind::Creature),
        "allocation planned"
    );
    Ok(plan)
}
