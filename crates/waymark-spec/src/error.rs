//! Error types for configuration validation and processing.

use thiserror::Error;

/// Error codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Document errors (E001-E004)
    /// E001: Unsupported config_version
    UnsupportedConfigVersion,
    /// E002: Wrong number of layers
    LayerCount,
    /// E003: A layer does not declare exactly the fixed trait count
    TraitCount,
    /// E004: Duplicate layer or trait name
    DuplicateName,

    // Scoring and tier errors (E005-E010)
    /// E005: Scoring table is missing a rarity category
    MissingScoringCategory,
    /// E006: Scoring weights are not positive and strictly increasing
    NonIncreasingWeights,
    /// E007: Wrong number of tiers
    TierCount,
    /// E008: Tier ranks are not numbered 1..K in order
    TierRankSequence,
    /// E009: Tier ranges overlap, leave a gap, or are inverted
    TierGapOrOverlap,
    /// E010: Tier table does not cover the achievable score range
    TierCoverage,

    // Station and allocation errors (E011-E014)
    /// E011: Stations are not exactly the fixed sequence 1..12
    StationSequence,
    /// E012: Allocation counts do not sum to the collection size
    AllocationTotal,
    /// E013: Allocation group references a bad or repeated station
    InvalidGroupStation,
    /// E014: Group ratios disagree with the group's count and hybrid override
    RatioMismatch,

    // Output errors (E015-E017)
    /// E015: Render order is not a permutation of the layer names
    InvalidRenderOrder,
    /// E016: Canvas dimensions are zero or too large
    InvalidCanvas,
    /// E017: Collection size is zero or exceeds the id width
    InvalidCollectionSize,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedConfigVersion => "E001",
            ErrorCode::LayerCount => "E002",
            ErrorCode::TraitCount => "E003",
            ErrorCode::DuplicateName => "E004",
            ErrorCode::MissingScoringCategory => "E005",
            ErrorCode::NonIncreasingWeights => "E006",
            ErrorCode::TierCount => "E007",
            ErrorCode::TierRankSequence => "E008",
            ErrorCode::TierGapOrOverlap => "E009",
            ErrorCode::TierCoverage => "E010",
            ErrorCode::StationSequence => "E011",
            ErrorCode::AllocationTotal => "E012",
            ErrorCode::InvalidGroupStation => "E013",
            ErrorCode::RatioMismatch => "E014",
            ErrorCode::InvalidRenderOrder => "E015",
            ErrorCode::InvalidCanvas => "E016",
            ErrorCode::InvalidCollectionSize => "E017",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Collection size differs from the standard 333
    NonStandardSize,
    /// W002: Missing collection description
    MissingDescription,
    /// W003: A rarity category is declared in scoring but used by no trait
    UnusedCategory,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NonStandardSize => "W001",
            WarningCode::MissingDescription => "W002",
            WarningCode::UnusedCategory => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "layers\[2\].traits").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a document path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a document path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for configuration operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Configuration validation failed with one or more errors.
    #[error("config validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report a
/// stable code and category without depending on backend internals.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "METADATA_001" or "IMAGE_002".
    fn code(&self) -> &'static str;

    /// Human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors ("metadata", "image").
    fn category(&self) -> &'static str;
}

/// A unified error type that can wrap any backend error.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "METADATA_002").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category.
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedConfigVersion.code(), "E001");
        assert_eq!(ErrorCode::TraitCount.code(), "E003");
        assert_eq!(ErrorCode::TierCoverage.code(), "E010");
        assert_eq!(ErrorCode::RatioMismatch.code(), "E014");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::NonStandardSize.code(), "W001");
        assert_eq!(WarningCode::MissingDescription.code(), "W002");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::LayerCount, "expected 7 layers, got 6");
        assert_eq!(err.to_string(), "E002: expected 7 layers, got 6");

        let err_with_path = ValidationError::with_path(
            ErrorCode::TraitCount,
            "expected 9 traits, got 8",
            "layers[3].traits",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E003: expected 9 traits, got 8 (at layers[3].traits)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::TierCount, "no tiers"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::TierCount));
        assert!(!result.has_error(ErrorCode::LayerCount));
        assert_eq!(result.errors.len(), 1);
    }

    #[derive(Debug, Error)]
    #[error("tier lookup failed")]
    struct FakeBackendError;

    impl BackendError for FakeBackendError {
        fn code(&self) -> &'static str {
            "FAKE_001"
        }

        fn category(&self) -> &'static str {
            "fake"
        }
    }

    #[test]
    fn test_generation_error_from_backend() {
        let err = GenerationError::from_backend(FakeBackendError);
        assert_eq!(err.code, "FAKE_001");
        assert_eq!(err.category, "fake");
        assert_eq!(err.to_string(), "[FAKE_001] tier lookup failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
