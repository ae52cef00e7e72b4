//! Builder pattern for creating reports.

use super::{ArtifactResult, Report, ReportError, ReportWarning, REPORT_VERSION};
use crate::config::CollectionConfig;
use crate::error::{ValidationError, ValidationWarning};

/// Builder for creating reports ergonomically.
pub struct ReportBuilder {
    config_hash: String,
    collection_name: Option<String>,
    seed: Option<String>,
    record_count: Option<usize>,
    collection_hash: Option<String>,
    ok: bool,
    errors: Vec<ReportError>,
    warnings: Vec<ReportWarning>,
    artifacts: Vec<ArtifactResult>,
    duration_ms: u64,
    tool_version: String,
}

impl ReportBuilder {
    /// Creates a new report builder.
    ///
    /// ```
    /// use waymark_spec::report::ReportBuilder;
    ///
    /// let report = ReportBuilder::new("a1b2c3".to_string(), "waymark-cli v0.1.0".to_string())
    ///     .ok(true)
    ///     .duration_ms(12)
    ///     .build();
    /// assert!(report.ok);
    /// ```
    pub fn new(config_hash: String, tool_version: String) -> Self {
        Self {
            config_hash,
            collection_name: None,
            seed: None,
            record_count: None,
            collection_hash: None,
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            artifacts: Vec::new(),
            duration_ms: 0,
            tool_version,
        }
    }

    /// Sets the ok status.
    pub fn ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    /// Adds provenance metadata from a configuration.
    pub fn config_metadata(mut self, config: &CollectionConfig) -> Self {
        self.collection_name = Some(config.collection.name.clone());
        self
    }

    /// Sets the seed used for the run.
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Sets the record count and collection digest.
    pub fn records(mut self, count: usize, collection_hash: impl Into<String>) -> Self {
        self.record_count = Some(count);
        self.collection_hash = Some(collection_hash.into());
        self
    }

    /// Adds an error to the report.
    pub fn error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self.ok = false;
        self
    }

    /// Adds errors from ValidationErrors.
    pub fn validation_errors(mut self, errors: &[ValidationError]) -> Self {
        if !errors.is_empty() {
            self.ok = false;
            self.errors
                .extend(errors.iter().map(ReportError::from_validation_error));
        }
        self
    }

    /// Adds warnings from ValidationWarnings.
    pub fn validation_warnings(mut self, warnings: &[ValidationWarning]) -> Self {
        self.warnings
            .extend(warnings.iter().map(ReportWarning::from_validation_warning));
        self
    }

    /// Adds written artifacts.
    pub fn artifacts(mut self, artifacts: Vec<ArtifactResult>) -> Self {
        self.artifacts.extend(artifacts);
        self
    }

    /// Sets the execution duration in milliseconds.
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Builds the final report.
    pub fn build(self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            config_hash: self.config_hash,
            collection_name: self.collection_name,
            seed: self.seed,
            record_count: self.record_count,
            collection_hash: self.collection_hash,
            ok: self.ok,
            errors: self.errors,
            warnings: self.warnings,
            artifacts: self.artifacts,
            duration_ms: self.duration_ms,
            tool_version: self.tool_version,
            platform: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        }
    }
}
