//! Tier ladder checks.

use crate::config::{Tier, TIER_COUNT};
use crate::error::{ErrorCode, ValidationError};

/// Validates a tier ladder.
///
/// Ranks must run 1..K in order, each range must be non-inverted, and
/// consecutive ranges must touch exactly (no gap, no overlap). When
/// `score_bounds` is given the ladder must also cover `[min, max]`.
pub fn validate_tier_table(tiers: &[Tier], score_bounds: Option<(u32, u32)>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tiers.len() != TIER_COUNT {
        errors.push(ValidationError::with_path(
            ErrorCode::TierCount,
            format!("expected {} tiers, got {}", TIER_COUNT, tiers.len()),
            "tiers",
        ));
    }

    for (i, tier) in tiers.iter().enumerate() {
        let expected = i as u32 + 1;
        if tier.rank != expected {
            errors.push(ValidationError::with_path(
                ErrorCode::TierRankSequence,
                format!("tier '{}' must have rank {}, got {}", tier.name, expected, tier.rank),
                format!("tiers[{}].rank", i),
            ));
        }
        if tier.min > tier.max {
            errors.push(ValidationError::with_path(
                ErrorCode::TierGapOrOverlap,
                format!(
                    "tier '{}' has min {} above max {}",
                    tier.name, tier.min, tier.max
                ),
                format!("tiers[{}]", i),
            ));
        }
    }

    for (i, pair) in tiers.windows(2).enumerate() {
        let (lower, upper) = (&pair[0], &pair[1]);
        let expected_min = lower.max.saturating_add(1);
        if upper.min > expected_min {
            errors.push(ValidationError::with_path(
                ErrorCode::TierGapOrOverlap,
                format!(
                    "gap between tier '{}' (max {}) and tier '{}' (min {})",
                    lower.name, lower.max, upper.name, upper.min
                ),
                format!("tiers[{}].min", i + 1),
            ));
        } else if upper.min < expected_min {
            errors.push(ValidationError::with_path(
                ErrorCode::TierGapOrOverlap,
                format!(
                    "tier '{}' (min {}) overlaps tier '{}' (max {})",
                    upper.name, upper.min, lower.name, lower.max
                ),
                format!("tiers[{}].min", i + 1),
            ));
        }
    }

    if let (Some((min_score, max_score)), Some(first), Some(last)) =
        (score_bounds, tiers.first(), tiers.last())
    {
        if first.min > min_score {
            errors.push(ValidationError::with_path(
                ErrorCode::TierCoverage,
                format!(
                    "lowest tier starts at {} but scores as low as {} are achievable",
                    first.min, min_score
                ),
                "tiers[0].min",
            ));
        }
        if last.max < max_score {
            errors.push(ValidationError::with_path(
                ErrorCode::TierCoverage,
                format!(
                    "highest tier ends at {} but scores as high as {} are achievable",
                    last.max, max_score
                ),
                format!("tiers[{}].max", tiers.len() - 1),
            ));
        }
    }

    errors
}
