//! Inspect command implementation
//!
//! Regenerates the collection in memory and prints one record.

use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use waymark_backend_metadata::generate_collection;
use waymark_spec::{validate_config, GeneratedRecord};

use super::reporting;
use super::EXIT_CONFIG_ERROR;
use crate::input::load_config;

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 if the configuration is invalid
pub fn run(
    config_path: Option<&str>,
    seed: Option<&str>,
    id: u32,
    json_output: bool,
) -> Result<ExitCode> {
    let label = config_path.unwrap_or("builtin");
    let loaded = load_config(config_path.map(Path::new))
        .with_context(|| format!("Failed to load config: {}", label))?;
    let config = &loaded.config;

    let validation = validate_config(config);
    if !validation.is_ok() {
        reporting::print_validation_results(&validation);
        return Ok(ExitCode::from(EXIT_CONFIG_ERROR));
    }

    let seed = seed.unwrap_or(&config.collection.seed);
    let record = find_record(config, seed, id)?;

    if json_output {
        println!("{}", record.to_json_pretty()?);
    } else {
        print_record(&record, seed);
    }
    Ok(ExitCode::SUCCESS)
}

/// Generates the collection and returns record `id`.
pub fn find_record(
    config: &waymark_spec::CollectionConfig,
    seed: &str,
    id: u32,
) -> Result<GeneratedRecord> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let collection = generate_collection(config, seed, &timestamp)?;
    match collection.record(id) {
        Some(record) => Ok(record.clone()),
        None => bail!(
            "record {} does not exist (collection has {} records)",
            id,
            collection.records.len()
        ),
    }
}

fn print_record(record: &GeneratedRecord, seed: &str) {
    println!("{} {}", record.display_name.cyan().bold(), record.short_code.dimmed());
    println!("{} {}", "Seed:".dimmed(), seed);
    println!(
        "{} {} ({})",
        "Station:".dimmed(),
        record.station.name,
        record.station.id
    );
    println!("{} {}", "Kind:".dimmed(), record.member_kind);
    println!();
    for attr in &record.attributes {
        println!(
            "  {:<10} {:<24} {:<14} {:>2}",
            attr.layer,
            attr.value,
            attr.rarity.as_str(),
            attr.weight
        );
    }
    println!();
    println!(
        "{} {} -> {} (tier {})",
        "Score:".bold(),
        record.total_score,
        record.tier_name.green(),
        record.tier_rank
    );
}
