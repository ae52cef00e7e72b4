//! Record assembler: runs the whole pipeline on one stream.
//!
//! Draw order for a run is:
//!
//! 1. `N - 1` draws for the blueprint shuffle,
//! 2. for each blueprint in id order, one draw per layer (declaration order),
//!    then [`SHORT_CODE_LENGTH`] draws for the short code.
//!
//! Reordering any of these changes every record after the change.

use tracing::{debug, info};
use waymark_spec::validation::validate_config;
use waymark_spec::{pad_id, CollectionConfig, GeneratedRecord, Provenance, StationRef, CREATOR_SHARE};

use crate::blueprint::{build_blueprints, Blueprint};
use crate::code::{generate_short_code, SHORT_CODE_LENGTH};
use crate::draft::draft_attributes;
use crate::error::GenerateError;
use crate::plan::plan_allocation;
use crate::rng::SeededStream;
use crate::summary::{summarize, CollectionSummary};
use crate::tier::{resolve_tier, total_score};

/// A finished run: every record in id order plus its summary.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Records sorted by id, ids `1..=N`.
    pub records: Vec<GeneratedRecord>,
    /// Distribution summary.
    pub summary: CollectionSummary,
}

impl Collection {
    /// Finds a record by id.
    pub fn record(&self, id: u32) -> Option<&GeneratedRecord> {
        id.checked_sub(1)
            .and_then(|idx| self.records.get(idx as usize))
    }
}

/// Number of draws a run over `count` records consumes.
pub fn expected_draws(count: u64, layer_count: u64) -> u64 {
    count.saturating_sub(1) + count * (layer_count + SHORT_CODE_LENGTH as u64)
}

/// Generates the full collection.
///
/// The configuration is validated first; any error aborts before the first
/// draw. `timestamp` is copied verbatim into every record.
pub fn generate_collection(
    config: &CollectionConfig,
    seed: &str,
    timestamp: &str,
) -> Result<Collection, GenerateError> {
    let validation = validate_config(config);
    if let Some(err) = GenerateError::from_validation(validation.errors) {
        return Err(err);
    }

    info!(
        collection = %config.collection.name,
        seed,
        size = config.collection.size,
        "generating collection"
    );

    let plan = plan_allocation(
        &config.allocation,
        config.collection.size,
        &config.stations,
    )?;

    let mut stream = SeededStream::new(seed);
    let blueprints = build_blueprints(&plan, &mut stream);

    let records = blueprints
        .iter()
        .map(|blueprint| assemble_record(config, blueprint, &mut stream, timestamp))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = summarize(config, &records, seed, stream.draws());
    info!(
        records = records.len(),
        draws = stream.draws(),
        "collection generated"
    );

    Ok(Collection { records, summary })
}

/// Drafts, scores and codes one blueprint.
pub fn assemble_record(
    config: &CollectionConfig,
    blueprint: &Blueprint,
    stream: &mut SeededStream,
    timestamp: &str,
) -> Result<GeneratedRecord, GenerateError> {
    let station = config
        .station(blueprint.station)
        .ok_or(GenerateError::UnknownStation(blueprint.station))?;

    let attributes = draft_attributes(&config.layers, &config.scoring, stream)?;
    let score = total_score(&attributes)?;
    let tier = resolve_tier(score, &config.tiers)?;
    let short_code = generate_short_code(stream);

    let padded = pad_id(blueprint.id, config.id_width());
    debug!(
        id = blueprint.id,
        station = blueprint.station,
        kind = %blueprint.kind,
        score,
        tier = tier.rank,
        "record assembled"
    );

    Ok(GeneratedRecord {
        id: blueprint.id,
        display_name: format!("{} #{}", config.collection.name, padded),
        station: StationRef {
            id: station.id,
            name: station.name.clone(),
        },
        member_kind: blueprint.kind,
        attributes,
        total_score: score,
        tier_name: tier.name.clone(),
        tier_rank: tier.rank,
        short_code,
        timestamp: timestamp.to_string(),
        provenance: Provenance {
            collection_name: config.collection.name.clone(),
            image: format!(
                "{}/{}.png",
                config.collection.image_base_uri.trim_end_matches('/'),
                padded
            ),
            creator_share: CREATOR_SHARE,
        },
    })
}
