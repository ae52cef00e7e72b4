use super::*;
use crate::allocation::GroupSpec;
use crate::config::{ScoringTable, Tier, Trait};

fn builtin() -> CollectionConfig {
    CollectionConfig::builtin()
}

fn codes(result: &ValidationResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|e| e.code).collect()
}

#[test]
fn test_builtin_config_is_valid() {
    let result = validate_config(&builtin());
    assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_wrong_version() {
    let mut config = builtin();
    config.config_version = 2;
    let result = validate_config(&config);
    assert_eq!(codes(&result), vec![ErrorCode::UnsupportedConfigVersion]);
}

#[test]
fn test_missing_layer() {
    let mut config = builtin();
    let removed = config.layers.pop().unwrap();
    config.canvas.render_order.retain(|name| name != &removed.name);
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::LayerCount));
}

#[test]
fn test_short_layer_is_fatal() {
    let mut config = builtin();
    config.layers[2].traits.pop();
    let result = validate_config(&config);
    assert!(!result.is_ok());
    let err = result
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::TraitCount)
        .unwrap();
    assert_eq!(err.path.as_deref(), Some("layers[2].traits"));
}

#[test]
fn test_duplicate_trait_name() {
    let mut config = builtin();
    let name = config.layers[0].traits[0].name.clone();
    config.layers[0].traits[1].name = name;
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::DuplicateName));
}

#[test]
fn test_duplicate_layer_name() {
    let mut config = builtin();
    config.layers[1].name = config.layers[0].name.clone();
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::DuplicateName));
}

#[test]
fn test_missing_scoring_category() {
    let mut config = builtin();
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 2),
        (Rarity::Mythic, 5),
    ]);
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::MissingScoringCategory));
    // Coverage is not evaluated against an unusable table.
    assert!(!result.has_error(ErrorCode::TierCoverage));
}

#[test]
fn test_non_increasing_weights() {
    let mut config = builtin();
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 3),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, 5),
    ]);
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::NonIncreasingWeights));
}

#[test]
fn test_zero_weight_rejected() {
    let mut config = builtin();
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 0),
        (Rarity::Threshold, 2),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, 5),
    ]);
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::NonIncreasingWeights));
}

#[test]
fn test_oversized_weight_is_reported_not_overflowed() {
    let mut config = builtin();
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 2),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, 700_000_000),
    ]);
    let result = validate_config(&config);
    assert!(!result.is_ok());
    assert!(result.has_error(ErrorCode::NonIncreasingWeights));
    // Coverage is skipped for an unusable scoring table.
    assert!(!result.has_error(ErrorCode::TierCoverage));
}

#[test]
fn test_max_weight_boundary() {
    let mut config = builtin();
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 2),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, MAX_WEIGHT),
    ]);
    let result = validate_config(&config);
    assert!(!result.has_error(ErrorCode::NonIncreasingWeights));
    assert_eq!(config.max_score(), Some(MAX_WEIGHT * LAYER_COUNT as u32));

    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 2),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, MAX_WEIGHT + 1),
    ]);
    assert!(validate_config(&config).has_error(ErrorCode::NonIncreasingWeights));
    assert_eq!(config.max_score(), None);
}

fn ladder(bounds: &[(u32, u32)]) -> Vec<Tier> {
    bounds
        .iter()
        .enumerate()
        .map(|(i, &(min, max))| Tier {
            rank: i as u32 + 1,
            name: format!("tier-{}", i + 1),
            min,
            max,
        })
        .collect()
}

#[test]
fn test_tier_ladder_valid() {
    let tiers = ladder(&[(7, 10), (11, 13), (14, 16), (17, 19), (20, 23), (24, 28), (29, 35)]);
    assert!(validate_tier_table(&tiers, Some((7, 35))).is_empty());
}

#[test]
fn test_tier_gap_detected() {
    let tiers = ladder(&[(7, 10), (12, 13), (14, 16), (17, 19), (20, 23), (24, 28), (29, 35)]);
    let errors = validate_tier_table(&tiers, Some((7, 35)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::TierGapOrOverlap);
    assert!(errors[0].message.contains("gap"));
}

#[test]
fn test_tier_overlap_detected() {
    let tiers = ladder(&[(7, 10), (10, 13), (14, 16), (17, 19), (20, 23), (24, 28), (29, 35)]);
    let errors = validate_tier_table(&tiers, Some((7, 35)));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("overlaps"));
}

#[test]
fn test_tier_coverage_detected() {
    let tiers = ladder(&[(8, 10), (11, 13), (14, 16), (17, 19), (20, 23), (24, 28), (29, 34)]);
    let errors = validate_tier_table(&tiers, Some((7, 35)));
    let coverage: Vec<_> = errors
        .iter()
        .filter(|e| e.code == ErrorCode::TierCoverage)
        .collect();
    assert_eq!(coverage.len(), 2);
}

#[test]
fn test_tier_rank_sequence() {
    let mut tiers = ladder(&[(7, 10), (11, 13), (14, 16), (17, 19), (20, 23), (24, 28), (29, 35)]);
    tiers[3].rank = 9;
    let errors = validate_tier_table(&tiers, Some((7, 35)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::TierRankSequence);
}

#[test]
fn test_inverted_tier() {
    let tiers = ladder(&[(7, 10), (11, 13), (16, 14), (17, 19), (20, 23), (24, 28), (29, 35)]);
    let errors = validate_tier_table(&tiers, None);
    assert!(errors.iter().any(|e| e.message.contains("above max")));
}

#[test]
fn test_tier_count() {
    let tiers = ladder(&[(7, 20), (21, 35)]);
    let errors = validate_tier_table(&tiers, Some((7, 35)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::TierCount);
}

#[test]
fn test_builtin_tiers_cover_weight_change() {
    let mut config = builtin();
    // Raising MYTHIC pushes the max achievable score past the last tier.
    config.scoring = ScoringTable::from_pairs([
        (Rarity::Chaos, 1),
        (Rarity::Threshold, 2),
        (Rarity::OrdealReward, 3),
        (Rarity::Mythic, 6),
    ]);
    let result = validate_config(&config);
    assert_eq!(codes(&result), vec![ErrorCode::TierCoverage]);
}

#[test]
fn test_station_sequence() {
    let mut config = builtin();
    config.stations.swap(0, 1);
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::StationSequence));
}

#[test]
fn test_allocation_total_mismatch() {
    let mut config = builtin();
    config.allocation.groups[0].count += 1;
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::AllocationTotal));
}

#[test]
fn test_allocation_duplicate_station() {
    let mut config = builtin();
    config.allocation.groups[1].station = 1;
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::InvalidGroupStation));
}

#[test]
fn test_allocation_station_out_of_range() {
    let mut config = builtin();
    config.allocation.groups[11].station = 13;
    let result = validate_config(&config);
    let err = result
        .errors
        .iter()
        .find(|e| e.code == ErrorCode::InvalidGroupStation)
        .unwrap();
    assert_eq!(err.path.as_deref(), Some("allocation.groups[11].station"));
}

#[test]
fn test_ratio_disagreement_is_fatal() {
    let mut config = builtin();
    // Station 8 declares one hybrid, so ratios summing to 1.0 are off by ~0.034.
    let group = &mut config.allocation.groups[7];
    assert_eq!(group.hybrids(), 1);
    group.human_ratio = 0.5;
    group.creature_ratio = 0.5;
    let result = validate_config(&config);
    assert_eq!(codes(&result), vec![ErrorCode::RatioMismatch]);
}

#[test]
fn test_ratio_within_tolerance() {
    let spec = crate::allocation::AllocationSpec {
        groups: (1..=12)
            .map(|station| GroupSpec::new(station, 10, 0.505, 0.5))
            .collect(),
    };
    let stations = builtin().stations;
    assert!(validate_allocation(&spec, 120, &stations).is_empty());
}

#[test]
fn test_hybrid_override_exceeds_count() {
    let spec = crate::allocation::AllocationSpec {
        groups: (1..=12)
            .map(|station| {
                let group = GroupSpec::new(station, 2, 0.5, 0.5);
                if station == 3 {
                    group.with_hybrids(3)
                } else {
                    group
                }
            })
            .collect(),
    };
    let stations = builtin().stations;
    let errors = validate_allocation(&spec, 24, &stations);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::RatioMismatch);
}

#[test]
fn test_ratio_out_of_range() {
    let mut config = builtin();
    config.allocation.groups[0].human_ratio = -0.5;
    config.allocation.groups[0].creature_ratio = 1.5;
    let result = validate_config(&config);
    let count = result
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::RatioMismatch)
        .count();
    assert_eq!(count, 2);
}

#[test]
fn test_render_order_must_be_permutation() {
    let mut config = builtin();
    config.canvas.render_order[6] = "Background".to_string();
    let result = validate_config(&config);
    let messages: Vec<&str> = result
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::InvalidRenderOrder)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("repeats"));
    assert!(messages[1].contains("omits"));
}

#[test]
fn test_render_order_unknown_layer() {
    let mut config = builtin();
    config.canvas.render_order.push("Cape".to_string());
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::InvalidRenderOrder));
}

#[test]
fn test_canvas_bounds() {
    let mut config = builtin();
    config.canvas.width = 0;
    assert!(validate_config(&config).has_error(ErrorCode::InvalidCanvas));
    config.canvas.width = MAX_CANVAS_DIMENSION + 1;
    assert!(validate_config(&config).has_error(ErrorCode::InvalidCanvas));
}

#[test]
fn test_collection_size_bounds() {
    let mut config = builtin();
    config.collection.size = 0;
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::InvalidCollectionSize));
    assert!(result.has_error(ErrorCode::AllocationTotal));
}

#[test]
fn test_warnings() {
    let mut config = builtin();
    config.collection.description = None;
    for layer in &mut config.layers {
        for t in &mut layer.traits {
            if t.category == Rarity::Mythic {
                *t = Trait::new(t.name.clone(), Rarity::OrdealReward);
            }
        }
    }
    let result = validate_config(&config);
    assert!(result.is_ok());
    let codes: Vec<WarningCode> = result.warnings.iter().map(|w| w.code).collect();
    assert_eq!(
        codes,
        vec![WarningCode::MissingDescription, WarningCode::UnusedCategory]
    );
}

#[test]
fn test_all_errors_collected() {
    let mut config = builtin();
    config.config_version = 0;
    config.layers[0].traits.pop();
    config.allocation.groups[0].count = 1;
    let result = validate_config(&config);
    assert!(result.has_error(ErrorCode::UnsupportedConfigVersion));
    assert!(result.has_error(ErrorCode::TraitCount));
    assert!(result.has_error(ErrorCode::AllocationTotal));
}
