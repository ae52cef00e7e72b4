//! Configuration validation logic.
//!
//! Every check appends to a shared [`ValidationResult`] so a caller sees all
//! configuration errors at once rather than the first one.

mod allocation;
mod tiers;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::config::{
    CollectionConfig, Rarity, CONFIG_VERSION, LAYER_COUNT, STANDARD_COLLECTION_SIZE,
    STATION_COUNT, TRAITS_PER_LAYER,
};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

pub use allocation::validate_allocation;
pub use tiers::validate_tier_table;

/// Largest canvas edge accepted, in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 4096;

/// Largest weight whose per-record total still fits a `u32` score.
pub const MAX_WEIGHT: u32 = u32::MAX / LAYER_COUNT as u32;

/// Largest collection size that still fits a 3-digit id.
pub const MAX_COLLECTION_SIZE: u32 = 999;

/// Validates a configuration and returns every error and warning found.
///
/// # Example
/// ```
/// use waymark_spec::{CollectionConfig, validation::validate_config};
///
/// let result = validate_config(&CollectionConfig::builtin());
/// assert!(result.is_ok());
/// ```
pub fn validate_config(config: &CollectionConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_version(config, &mut result);
    validate_collection(config, &mut result);
    validate_layers(config, &mut result);
    let scoring_ok = validate_scoring(config, &mut result);

    // Coverage can only be checked against a usable scoring table.
    let bounds = if scoring_ok {
        config.min_score().zip(config.max_score())
    } else {
        None
    };
    for error in validate_tier_table(&config.tiers, bounds) {
        result.add_error(error);
    }

    validate_stations(config, &mut result);
    for error in validate_allocation(&config.allocation, config.collection.size, &config.stations) {
        result.add_error(error);
    }
    validate_canvas(config, &mut result);

    check_warnings(config, &mut result);

    result
}

fn validate_version(config: &CollectionConfig, result: &mut ValidationResult) {
    if config.config_version != CONFIG_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedConfigVersion,
            format!(
                "config_version must be {}, got {}",
                CONFIG_VERSION, config.config_version
            ),
            "config_version",
        ));
    }
}

fn validate_collection(config: &CollectionConfig, result: &mut ValidationResult) {
    let size = config.collection.size;
    if size == 0 || size > MAX_COLLECTION_SIZE {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCollectionSize,
            format!(
                "collection size must be in [1, {}], got {}",
                MAX_COLLECTION_SIZE, size
            ),
            "collection.size",
        ));
    }
}

fn validate_layers(config: &CollectionConfig, result: &mut ValidationResult) {
    if config.layers.len() != LAYER_COUNT {
        result.add_error(ValidationError::with_path(
            ErrorCode::LayerCount,
            format!(
                "expected {} layers, got {}",
                LAYER_COUNT,
                config.layers.len()
            ),
            "layers",
        ));
    }

    let mut layer_names = HashSet::new();
    for (i, layer) in config.layers.iter().enumerate() {
        if !layer_names.insert(layer.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateName,
                format!("duplicate layer name '{}'", layer.name),
                format!("layers[{}].name", i),
            ));
        }

        if layer.traits.len() != TRAITS_PER_LAYER {
            result.add_error(ValidationError::with_path(
                ErrorCode::TraitCount,
                format!(
                    "layer '{}' must declare {} traits, got {}",
                    layer.name,
                    TRAITS_PER_LAYER,
                    layer.traits.len()
                ),
                format!("layers[{}].traits", i),
            ));
        }

        let mut trait_names = HashSet::new();
        for (j, t) in layer.traits.iter().enumerate() {
            if !trait_names.insert(t.name.as_str()) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::DuplicateName,
                    format!("duplicate trait '{}' in layer '{}'", t.name, layer.name),
                    format!("layers[{}].traits[{}].name", i, j),
                ));
            }
        }
    }
}

/// Returns true when the table is complete and strictly increasing.
fn validate_scoring(config: &CollectionConfig, result: &mut ValidationResult) -> bool {
    let mut ok = true;
    let mut previous: Option<(Rarity, u32)> = None;

    for &rarity in Rarity::all() {
        let Some(weight) = config.scoring.weight(rarity) else {
            result.add_error(ValidationError::with_path(
                ErrorCode::MissingScoringCategory,
                format!("scoring table has no weight for {}", rarity),
                format!("scoring.{}", rarity),
            ));
            ok = false;
            continue;
        };

        if weight == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonIncreasingWeights,
                format!("weight for {} must be positive", rarity),
                format!("scoring.{}", rarity),
            ));
            ok = false;
        } else if weight > MAX_WEIGHT {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonIncreasingWeights,
                format!(
                    "weight for {} ({}) exceeds the maximum of {}",
                    rarity, weight, MAX_WEIGHT
                ),
                format!("scoring.{}", rarity),
            ));
            ok = false;
        }

        if let Some((prev_rarity, prev_weight)) = previous {
            if weight <= prev_weight {
                result.add_error(ValidationError::with_path(
                    ErrorCode::NonIncreasingWeights,
                    format!(
                        "weight for {} ({}) must exceed weight for {} ({})",
                        rarity, weight, prev_rarity, prev_weight
                    ),
                    format!("scoring.{}", rarity),
                ));
                ok = false;
            }
        }
        previous = Some((rarity, weight));
    }

    ok
}

fn validate_stations(config: &CollectionConfig, result: &mut ValidationResult) {
    if config.stations.len() != STATION_COUNT {
        result.add_error(ValidationError::with_path(
            ErrorCode::StationSequence,
            format!(
                "expected {} stations, got {}",
                STATION_COUNT,
                config.stations.len()
            ),
            "stations",
        ));
    }

    for (i, station) in config.stations.iter().enumerate() {
        let expected = i as u32 + 1;
        if station.id != expected {
            result.add_error(ValidationError::with_path(
                ErrorCode::StationSequence,
                format!(
                    "station at position {} must have id {}, got {}",
                    i, expected, station.id
                ),
                format!("stations[{}].id", i),
            ));
        }
    }
}

fn validate_canvas(config: &CollectionConfig, result: &mut ValidationResult) {
    let canvas = &config.canvas;
    if canvas.width == 0
        || canvas.height == 0
        || canvas.width > MAX_CANVAS_DIMENSION
        || canvas.height > MAX_CANVAS_DIMENSION
    {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCanvas,
            format!(
                "canvas must be between 1x1 and {}x{}, got {}x{}",
                MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION, canvas.width, canvas.height
            ),
            "canvas",
        ));
    }

    let layer_names: HashSet<&str> = config.layers.iter().map(|l| l.name.as_str()).collect();
    let mut seen = HashSet::new();
    for (i, name) in canvas.render_order.iter().enumerate() {
        if !layer_names.contains(name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidRenderOrder,
                format!("render order names unknown layer '{}'", name),
                format!("canvas.render_order[{}]", i),
            ));
        } else if !seen.insert(name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidRenderOrder,
                format!("render order repeats layer '{}'", name),
                format!("canvas.render_order[{}]", i),
            ));
        }
    }
    for layer in &config.layers {
        if !seen.contains(layer.name.as_str()) && layer_names.len() == config.layers.len() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidRenderOrder,
                format!("render order omits layer '{}'", layer.name),
                "canvas.render_order",
            ));
        }
    }
}

fn check_warnings(config: &CollectionConfig, result: &mut ValidationResult) {
    if config.collection.size != STANDARD_COLLECTION_SIZE {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonStandardSize,
            format!(
                "collection size {} differs from the standard {}",
                config.collection.size, STANDARD_COLLECTION_SIZE
            ),
            "collection.size",
        ));
    }

    let has_description = config
        .collection
        .description
        .as_ref()
        .is_some_and(|d| !d.trim().is_empty());
    if !has_description {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "collection has no description",
            "collection.description",
        ));
    }

    for (rarity, _) in config.scoring.iter() {
        let used = config
            .layers
            .iter()
            .flat_map(|l| l.traits.iter())
            .any(|t| t.category == rarity);
        if !used {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnusedCategory,
                format!("no trait uses rarity {}", rarity),
                format!("scoring.{}", rarity),
            ));
        }
    }
}
