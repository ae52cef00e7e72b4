//! Allocation spec checks.

use std::collections::HashSet;

use crate::allocation::{AllocationSpec, RATIO_TOLERANCE};
use crate::config::{Station, STATION_COUNT};
use crate::error::{ErrorCode, ValidationError};

/// Validates an allocation against the declared collection size.
///
/// Ratio disagreement beyond [`RATIO_TOLERANCE`] is an error; the planner
/// never silently corrects it.
pub fn validate_allocation(
    spec: &AllocationSpec,
    collection_size: u32,
    stations: &[Station],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if spec.groups.len() != STATION_COUNT {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidGroupStation,
            format!(
                "expected {} allocation groups, got {}",
                STATION_COUNT,
                spec.groups.len()
            ),
            "allocation.groups",
        ));
    }

    let total = spec.total();
    if total != u64::from(collection_size) {
        errors.push(ValidationError::with_path(
            ErrorCode::AllocationTotal,
            format!(
                "group counts sum to {} but the collection size is {}",
                total, collection_size
            ),
            "allocation.groups",
        ));
    }

    let known: HashSet<u32> = stations.iter().map(|s| s.id).collect();
    let mut seen = HashSet::new();

    for (i, group) in spec.groups.iter().enumerate() {
        let path = format!("allocation.groups[{}]", i);

        if group.station == 0 || group.station as usize > STATION_COUNT {
            errors.push(ValidationError::with_path(
                ErrorCode::InvalidGroupStation,
                format!(
                    "station id must be in [1, {}], got {}",
                    STATION_COUNT, group.station
                ),
                format!("{}.station", path),
            ));
        } else if !known.contains(&group.station) {
            errors.push(ValidationError::with_path(
                ErrorCode::InvalidGroupStation,
                format!("station {} is not declared in stations", group.station),
                format!("{}.station", path),
            ));
        }
        if !seen.insert(group.station) {
            errors.push(ValidationError::with_path(
                ErrorCode::InvalidGroupStation,
                format!("station {} has more than one group", group.station),
                format!("{}.station", path),
            ));
        }

        for (name, ratio) in [
            ("human_ratio", group.human_ratio),
            ("creature_ratio", group.creature_ratio),
        ] {
            if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
                errors.push(ValidationError::with_path(
                    ErrorCode::RatioMismatch,
                    format!("{} must be in [0, 1], got {}", name, ratio),
                    format!("{}.{}", path, name),
                ));
            }
        }

        if group.hybrids() > group.count {
            errors.push(ValidationError::with_path(
                ErrorCode::RatioMismatch,
                format!(
                    "hybrid_count {} exceeds group count {}",
                    group.hybrids(),
                    group.count
                ),
                format!("{}.hybrid_count", path),
            ));
            continue;
        }

        if group.count > 0 {
            let declared = group.human_ratio + group.creature_ratio;
            let expected = group.expected_majority_share();
            if !declared.is_finite() || (declared - expected).abs() > RATIO_TOLERANCE {
                errors.push(ValidationError::with_path(
                    ErrorCode::RatioMismatch,
                    format!(
                        "ratios sum to {:.4} but (count - hybrids) / count is {:.4}",
                        declared, expected
                    ),
                    path,
                ));
            }
        }
    }

    errors
}
