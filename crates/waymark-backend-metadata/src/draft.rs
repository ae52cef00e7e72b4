//! Attribute drafter: one trait per layer, in declaration order.

use waymark_spec::{DraftedAttribute, Layer, ScoringTable};

use crate::error::GenerateError;
use crate::rng::SeededStream;

/// Draws one trait from each layer.
///
/// Layers are visited in the order given, with exactly one draw each:
/// `floor(draw * trait_count)` picks the trait. The trait's weight comes from
/// the scoring table.
pub fn draft_attributes(
    layers: &[Layer],
    scoring: &ScoringTable,
    stream: &mut SeededStream,
) -> Result<Vec<DraftedAttribute>, GenerateError> {
    layers
        .iter()
        .map(|layer| draft_layer(layer, scoring, stream))
        .collect()
}

/// Draws one trait from a single layer.
pub fn draft_layer(
    layer: &Layer,
    scoring: &ScoringTable,
    stream: &mut SeededStream,
) -> Result<DraftedAttribute, GenerateError> {
    let picked = stream
        .checked_index(layer.traits.len())
        .map(|i| &layer.traits[i])
        .ok_or_else(|| GenerateError::InvalidLayer {
            layer: layer.name.clone(),
            reason: "layer has no traits".to_string(),
        })?;
    let weight = scoring
        .weight(picked.category)
        .ok_or_else(|| GenerateError::InvalidLayer {
            layer: layer.name.clone(),
            reason: format!(
                "trait '{}' uses unscored category {}",
                picked.name, picked.category
            ),
        })?;

    Ok(DraftedAttribute {
        layer: layer.name.clone(),
        value: picked.name.clone(),
        rarity: picked.category,
        weight,
    })
}
