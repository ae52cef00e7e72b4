//! Score and tier resolution.

use waymark_spec::{DraftedAttribute, Tier};

use crate::error::GenerateError;

/// Sums attribute weights.
///
/// Fails with [`GenerateError::ScoreOverflow`] if the sum exceeds `u32`.
pub fn total_score(attributes: &[DraftedAttribute]) -> Result<u32, GenerateError> {
    attributes
        .iter()
        .try_fold(0u32, |acc, a| acc.checked_add(a.weight))
        .ok_or(GenerateError::ScoreOverflow)
}

/// Finds the tier whose inclusive range contains `score`.
///
/// A miss means the tier table does not cover the scoring table, which
/// validation should have caught; it is reported as
/// [`GenerateError::TierNotFound`], not as a configuration error.
pub fn resolve_tier(score: u32, tiers: &[Tier]) -> Result<&Tier, GenerateError> {
    tiers
        .iter()
        .find(|tier| tier.contains(score))
        .ok_or(GenerateError::TierNotFound { score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_spec::{BackendError, CollectionConfig, Rarity};

    fn attr(weight: u32) -> DraftedAttribute {
        DraftedAttribute {
            layer: "Body".to_string(),
            value: "Stone".to_string(),
            rarity: Rarity::Chaos,
            weight,
        }
    }

    #[test]
    fn test_total_score() {
        assert_eq!(total_score(&[]).unwrap(), 0);
        assert_eq!(total_score(&[attr(1), attr(2), attr(5)]).unwrap(), 8);
    }

    #[test]
    fn test_total_score_overflow_is_an_error() {
        let err = total_score(&[attr(u32::MAX), attr(1)]).unwrap_err();
        assert!(matches!(err, GenerateError::ScoreOverflow));
        assert_eq!(err.code(), "METADATA_006");
        assert_eq!(total_score(&[attr(u32::MAX - 1), attr(1)]).unwrap(), u32::MAX);
    }

    #[test]
    fn test_builtin_tiers_resolve_every_achievable_score() {
        let config = CollectionConfig::builtin();
        let min = config.min_score().unwrap();
        let max = config.max_score().unwrap();
        for score in min..=max {
            let tier = resolve_tier(score, &config.tiers).unwrap();
            assert!(tier.min <= score && score <= tier.max);
        }
    }

    #[test]
    fn test_builtin_boundaries() {
        let config = CollectionConfig::builtin();
        assert_eq!(resolve_tier(7, &config.tiers).unwrap().name, "Wanderer");
        assert_eq!(resolve_tier(10, &config.tiers).unwrap().rank, 1);
        assert_eq!(resolve_tier(11, &config.tiers).unwrap().name, "Seeker");
        assert_eq!(resolve_tier(35, &config.tiers).unwrap().name, "Mythbound");
    }

    #[test]
    fn test_out_of_range_score_is_consistency_error() {
        let config = CollectionConfig::builtin();
        let err = resolve_tier(36, &config.tiers).unwrap_err();
        assert!(matches!(err, GenerateError::TierNotFound { score: 36 }));
        assert_eq!(err.code(), "METADATA_002");

        let err = resolve_tier(0, &config.tiers).unwrap_err();
        assert!(matches!(err, GenerateError::TierNotFound { score: 0 }));
    }
}
