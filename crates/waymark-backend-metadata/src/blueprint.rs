//! Blueprint builder: expands an allocation plan into shuffled skeletons.

use serde::Serialize;
use tracing::debug;
use waymark_spec::MemberKind;

use crate::plan::AllocationPlan;
use crate::rng::{shuffle, SeededStream};

/// The (id, station, kind) skeleton of one collection member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    /// 1-based id. Provisional before the shuffle, final after.
    pub id: u32,
    /// Station id.
    pub station: u32,
    /// Member kind.
    pub kind: MemberKind,
}

/// Expands a plan into blueprints in declared order, without shuffling.
///
/// Within each station, Hybrid members come first, then Human, then
/// Creature. Ids are assigned 1.. in append order.
pub fn expand_plan(plan: &AllocationPlan) -> Vec<Blueprint> {
    let mut blueprints = Vec::with_capacity(plan.total() as usize);
    for station in &plan.stations {
        for entry in &station.entries {
            for _ in 0..entry.count {
                blueprints.push(Blueprint {
                    id: blueprints.len() as u32 + 1,
                    station: station.station,
                    kind: entry.kind,
                });
            }
        }
    }
    blueprints
}

/// Expands, shuffles and re-indexes the plan.
///
/// After the shuffle every blueprint's id is overwritten with its 1-based
/// position, so the returned vector is sorted by id and ids are exactly
/// `1..=plan.total()`.
pub fn build_blueprints(plan: &AllocationPlan, stream: &mut SeededStream) -> Vec<Blueprint> {
    let mut blueprints = expand_plan(plan);
    shuffle(&mut blueprints, stream);
    for (position, blueprint) in blueprints.iter_mut().enumerate() {
        blueprint.id = position as u32 + 1;
    }
    debug!(count = blueprints.len(), draws = stream.draws(), "blueprints shuffled");
    blueprints
}
