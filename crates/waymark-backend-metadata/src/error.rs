//! Errors from collection generation.

use thiserror::Error;
use waymark_spec::{BackendError, ValidationError};

/// Errors from the metadata generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The configuration failed validation before any draws were made.
    #[error("invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// A computed score fell outside every tier range.
    ///
    /// Unreachable for a validated configuration; signals that the tier table
    /// and scoring table disagree.
    #[error("score {score} matches no tier")]
    TierNotFound { score: u32 },

    /// A group could not be split into exact per-kind counts.
    #[error("station {station}: {reason}")]
    InvalidAllocation { station: u32, reason: String },

    /// A layer referenced during drafting is unusable.
    #[error("layer '{layer}': {reason}")]
    InvalidLayer { layer: String, reason: String },

    /// A blueprint references a station that is not configured.
    #[error("unknown station {0}")]
    UnknownStation(u32),

    /// A record's summed weights do not fit a `u32` score.
    #[error("score overflows u32")]
    ScoreOverflow,
}

impl GenerateError {
    /// Wraps validation errors, or returns `None` if there are none.
    pub fn from_validation(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(GenerateError::InvalidConfig(errors))
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(_) => "METADATA_001",
            GenerateError::TierNotFound { .. } => "METADATA_002",
            GenerateError::InvalidAllocation { .. } => "METADATA_003",
            GenerateError::InvalidLayer { .. } => "METADATA_004",
            GenerateError::UnknownStation(_) => "METADATA_005",
            GenerateError::ScoreOverflow => "METADATA_006",
        }
    }

    fn category(&self) -> &'static str {
        "metadata"
    }
}
