use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::warn;
use waymark_spec::hash::canonical_config_hash;
use waymark_spec::{CollectionConfig, Report, ValidationResult};

/// Placeholder recorded when no config hash could be computed.
pub(crate) const UNKNOWN_HASH: &str = "unknown";

/// Prints validation errors and warnings in the human format.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for err in &result.errors {
            let path = err
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!("  {} [{}]{}: {}", "x".red(), err.code, path.dimmed(), err.message);
        }
    }
    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warn in &result.warnings {
            let path = warn
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!("  {} [{}]{}: {}", "!".yellow(), warn.code, path.dimmed(), warn.message);
        }
    }
}

/// Prints a report as pretty JSON on stdout.
pub(crate) fn print_report_json(report: &Report) -> Result<()> {
    let json = report.to_json_pretty().context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = report.to_json_pretty().context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report to: {}", path.display()))?;
    Ok(())
}

pub(crate) fn tool_version() -> String {
    format!("waymark-cli v{}", env!("CARGO_PKG_VERSION"))
}

/// Canonical hash of `config`, or [`UNKNOWN_HASH`] with a logged warning.
pub(crate) fn config_hash(config: &CollectionConfig) -> String {
    canonical_config_hash(config).unwrap_or_else(|e| {
        warn!(error = %e, "config hash not computed");
        UNKNOWN_HASH.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_spec::ReportBuilder;

    #[test]
    fn test_write_report_creates_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("report.json");
        let report = ReportBuilder::new("abc".to_string(), tool_version()).build();
        write_report(&report, &path).unwrap();

        let parsed = Report::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.config_hash, "abc");
        assert!(parsed.tool_version.starts_with("waymark-cli v"));
    }

    #[test]
    fn test_config_hash_matches_canonical() {
        let config = CollectionConfig::builtin();
        let hash = config_hash(&config);
        assert_ne!(hash, UNKNOWN_HASH);
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, canonical_config_hash(&config).unwrap());
    }
}
