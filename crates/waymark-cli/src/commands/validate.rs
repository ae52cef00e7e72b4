//! Validate command implementation
//!
//! Loads a configuration and checks every invariant without generating.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use waymark_spec::{validate_config, Report, ReportBuilder, ReportError};

use super::reporting;
use super::EXIT_CONFIG_ERROR;
use crate::input::load_config;

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the configuration (JSON or YAML); bundled config if `None`
/// * `json_output` - Whether to print the report as JSON instead of colored text
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(config_path: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let label = config_path.unwrap_or("builtin");
    println!("{} {}", "Validating:".cyan().bold(), label);

    let loaded = load_config(config_path.map(Path::new))
        .with_context(|| format!("Failed to load config: {}", label))?;
    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        loaded.source_kind,
        &loaded.source_hash[..16]
    );

    let result = validate_config(&loaded.config);
    let duration_ms = start.elapsed().as_millis() as u64;
    reporting::print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Config is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Config has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(EXIT_CONFIG_ERROR))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(config_path: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();
    let report = build_report(config_path, start);
    reporting::print_report_json(&report)?;
    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_CONFIG_ERROR)
    })
}

/// Loads and validates, folding every failure into a report.
pub(crate) fn build_report(config_path: Option<&str>, start: Instant) -> Report {
    let loaded = match load_config(config_path.map(Path::new)) {
        Ok(loaded) => loaded,
        Err(e) => {
            return ReportBuilder::new(
                reporting::UNKNOWN_HASH.to_string(),
                reporting::tool_version(),
            )
            .error(ReportError::new("INPUT", e.to_string()))
            .duration_ms(start.elapsed().as_millis() as u64)
            .build();
        }
    };

    let config_hash = reporting::config_hash(&loaded.config);
    let result = validate_config(&loaded.config);

    ReportBuilder::new(config_hash, reporting::tool_version())
        .config_metadata(&loaded.config)
        .validation_errors(&result.errors)
        .validation_warnings(&result.warnings)
        .duration_ms(start.elapsed().as_millis() as u64)
        .build()
}
