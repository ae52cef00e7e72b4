//! Generate command implementation
//!
//! Generates the full collection and writes per-record metadata, per-record
//! images, the collection summary and a report under the output root.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};
use waymark_backend_image::png::{write_rgba_to_vec_with_hash, PngConfig};
use waymark_backend_image::render_record;
use waymark_backend_metadata::{generate_collection, Collection};
use waymark_spec::hash::canonical_records_hash;
use waymark_spec::report::REPORT_FILENAME;
use waymark_spec::{
    validate_config, ArtifactKind, ArtifactResult, CollectionConfig, GenerationError, Report,
    ReportBuilder, ReportError,
};

use super::reporting;
use super::{EXIT_CONFIG_ERROR, EXIT_GENERATION_ERROR};
use crate::input::load_config;
use crate::output::{image_path, metadata_path, write_artifact, SUMMARY_FILENAME};

/// Default asset directory when `--assets` is not given.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Options for one generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Configuration path; bundled config if `None`.
    pub config: Option<String>,
    /// Seed override; the configuration's seed if `None`.
    pub seed: Option<String>,
    /// Output root; current directory if `None`.
    pub out_root: Option<String>,
    /// Asset root; [`DEFAULT_ASSETS_DIR`] if `None`.
    pub assets: Option<String>,
    /// Write metadata only.
    pub skip_images: bool,
    /// Print the report as JSON instead of colored text.
    pub json: bool,
}

/// Outcome of a run, before it is printed.
struct RunOutcome {
    report: Report,
    exit: u8,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 for configuration errors, 2 for generation errors
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = PathBuf::from(args.out_root.as_deref().unwrap_or("."));
    let label = args.config.as_deref().unwrap_or("builtin");

    if !args.json {
        println!("{} {}", "Generating:".cyan().bold(), label);
    }

    let outcome = execute(args, &out_root, start)?;
    let report_path = out_root.join(REPORT_FILENAME);
    reporting::write_report(&outcome.report, &report_path)?;

    if args.json {
        reporting::print_report_json(&outcome.report)?;
    } else {
        print_outcome(&outcome.report, &report_path);
    }

    Ok(if outcome.exit == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(outcome.exit)
    })
}

fn execute(args: &GenerateArgs, out_root: &Path, start: Instant) -> Result<RunOutcome> {
    let elapsed = || start.elapsed().as_millis() as u64;

    let loaded = match load_config(args.config.as_deref().map(Path::new)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let report = ReportBuilder::new(
                reporting::UNKNOWN_HASH.to_string(),
                reporting::tool_version(),
            )
            .error(ReportError::new("INPUT", e.to_string()))
            .duration_ms(elapsed())
            .build();
            return Ok(RunOutcome {
                report,
                exit: EXIT_CONFIG_ERROR,
            });
        }
    };
    let config = &loaded.config;
    let config_hash = reporting::config_hash(config);
    let seed = args
        .seed
        .clone()
        .unwrap_or_else(|| config.collection.seed.clone());

    let builder = ReportBuilder::new(config_hash, reporting::tool_version())
        .config_metadata(config)
        .seed(seed.clone());

    let validation = validate_config(config);
    let builder = builder.validation_warnings(&validation.warnings);
    if !validation.is_ok() {
        let report = builder
            .validation_errors(&validation.errors)
            .duration_ms(elapsed())
            .build();
        return Ok(RunOutcome {
            report,
            exit: EXIT_CONFIG_ERROR,
        });
    }

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let collection = match generate_collection(config, &seed, &timestamp) {
        Ok(collection) => collection,
        Err(e) => {
            let err = GenerationError::from_backend(e);
            let report = builder
                .error(ReportError::from_generation_error(&err))
                .duration_ms(elapsed())
                .build();
            return Ok(RunOutcome {
                report,
                exit: EXIT_GENERATION_ERROR,
            });
        }
    };

    let mut artifacts = write_metadata(config, &collection, out_root)?;
    let collection_hash = canonical_records_hash(&collection.records)?;
    let mut builder = builder.records(collection.records.len(), collection_hash);

    let mut exit = 0;
    if args.skip_images {
        info!("skipping image rendering");
    } else {
        let assets_root = PathBuf::from(args.assets.as_deref().unwrap_or(DEFAULT_ASSETS_DIR));
        let (images, errors) = write_images(config, &collection, &assets_root, out_root)?;
        artifacts.extend(images);
        if !errors.is_empty() {
            exit = EXIT_GENERATION_ERROR;
            for err in errors {
                builder = builder.error(err);
            }
        }
    }

    let report = builder
        .artifacts(artifacts)
        .duration_ms(elapsed())
        .build();
    Ok(RunOutcome { report, exit })
}

/// Writes `metadata/<id>.json` for every record and `summary.json`.
fn write_metadata(
    config: &CollectionConfig,
    collection: &Collection,
    out_root: &Path,
) -> Result<Vec<ArtifactResult>> {
    let width = config.id_width();
    let mut artifacts = Vec::with_capacity(collection.records.len() + 1);

    for record in &collection.records {
        let json = record
            .to_json_pretty()
            .with_context(|| format!("Failed to serialize record {}", record.id))?;
        artifacts.push(write_artifact(
            out_root,
            &metadata_path(record.id, width),
            ArtifactKind::Metadata,
            json.as_bytes(),
        )?);
    }

    let summary =
        serde_json::to_string_pretty(&collection.summary).context("Failed to serialize summary")?;
    artifacts.push(write_artifact(
        out_root,
        Path::new(SUMMARY_FILENAME),
        ArtifactKind::Summary,
        summary.as_bytes(),
    )?);

    info!(records = collection.records.len(), "metadata written");
    Ok(artifacts)
}

/// Renders `images/<id>.png` for every record.
///
/// Rendering errors are collected per record so one run reports every
/// missing asset; I/O failures while writing still abort.
fn write_images(
    config: &CollectionConfig,
    collection: &Collection,
    assets_root: &Path,
    out_root: &Path,
) -> Result<(Vec<ArtifactResult>, Vec<ReportError>)> {
    let width = config.id_width();
    let png_config = PngConfig::default();
    let mut artifacts = Vec::with_capacity(collection.records.len());
    let mut errors = Vec::new();

    for record in &collection.records {
        let rel = image_path(record.id, width);
        let encoded = render_record(config, record, assets_root).and_then(|canvas| {
            write_rgba_to_vec_with_hash(&canvas, &png_config).map_err(Into::into)
        });
        match encoded {
            Ok((bytes, _)) => {
                artifacts.push(write_artifact(out_root, &rel, ArtifactKind::Image, &bytes)?);
            }
            Err(e) => {
                warn!(id = record.id, error = %e, "image not rendered");
                let err = GenerationError::from_backend(e);
                let mut entry = ReportError::from_generation_error(&err);
                entry.path = Some(rel.display().to_string());
                errors.push(entry);
            }
        }
    }

    Ok((artifacts, errors))
}

fn print_outcome(report: &Report, report_path: &Path) {
    if let Some(seed) = &report.seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }
    for warning in &report.warnings {
        println!("  {} [{}]: {}", "!".yellow(), warning.code, warning.message);
    }
    for err in report.errors.iter().take(20) {
        let path = err
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!("  {} [{}]{}: {}", "x".red(), err.code, path.dimmed(), err.message);
    }
    if report.errors.len() > 20 {
        println!("  {} ... and {} more", "x".red(), report.errors.len() - 20);
    }

    let count = |kind: ArtifactKind| report.artifacts.iter().filter(|a| a.kind == kind).count();
    println!(
        "  {} {} metadata file(s), {} image(s)",
        "+".green(),
        count(ArtifactKind::Metadata),
        count(ArtifactKind::Image)
    );
    println!("{} {}", "Report:".dimmed(), report_path.display());

    if report.ok {
        println!(
            "\n{} Generated {} records ({}ms)",
            "SUCCESS".green().bold(),
            report.record_count.unwrap_or(0),
            report.duration_ms
        );
    } else {
        println!(
            "\n{} {} error(s) ({}ms)",
            "FAILED".red().bold(),
            report.errors.len(),
            report.duration_ms
        );
    }
}
