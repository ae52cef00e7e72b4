//! Report types for `waymark validate` and `waymark generate` runs.
//!
//! A report records whether the run succeeded, every error and warning, the
//! configuration hash and seed, and the artifacts that were written.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ReportBuilder;
pub use error::{ReportError, ReportWarning};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Standard report filename inside an output root.
pub const REPORT_FILENAME: &str = "report.json";

/// Kind of artifact written by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Per-record metadata JSON.
    Metadata,
    /// Per-record composited PNG.
    Image,
    /// Collection summary JSON.
    Summary,
}

/// One written artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactResult {
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Path relative to the output root.
    pub path: PathBuf,
    /// Hex-encoded BLAKE3 hash of the written bytes.
    pub hash: String,
}

impl ArtifactResult {
    /// Creates an artifact entry, hashing the written bytes.
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        Self {
            kind,
            path: path.into(),
            hash: crate::hash::blake3_hash(bytes),
        }
    }
}

/// A complete report for a validation or generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version.
    pub report_version: u32,
    /// Hex-encoded BLAKE3 hash of the canonicalized configuration.
    pub config_hash: String,
    /// Collection name from the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// Seed used for this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Number of records generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
    /// Digest of all records with timestamps removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_hash: Option<String>,
    /// Whether the operation succeeded without errors.
    pub ok: bool,
    /// Errors that occurred.
    pub errors: Vec<ReportError>,
    /// Warnings that were generated.
    pub warnings: Vec<ReportWarning>,
    /// Artifacts written.
    pub artifacts: Vec<ArtifactResult>,
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
    /// Tool identifier and version (e.g., "waymark-cli v0.1.0").
    pub tool_version: String,
    /// Platform the run executed on (e.g., "x86_64-linux").
    pub platform: String,
}

impl Report {
    /// Creates a new report builder.
    pub fn builder(config_hash: String, tool_version: String) -> ReportBuilder {
        ReportBuilder::new(config_hash, tool_version)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
