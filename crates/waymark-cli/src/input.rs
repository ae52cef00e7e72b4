//! Configuration loading from JSON or YAML sources.
//!
//! Dispatches by file extension and returns the parsed configuration with
//! source provenance. With no path, the bundled configuration is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use waymark_spec::config::BUILTIN_CONFIG;
use waymark_spec::CollectionConfig;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Identifies where a configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON file.
    Json,
    /// YAML file.
    Yaml,
    /// Configuration bundled with the binary.
    Builtin,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Yaml => "yaml",
            SourceKind::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loaded configuration.
#[derive(Debug)]
pub struct LoadResult {
    /// Parsed configuration.
    pub config: CollectionConfig,
    /// Source format.
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the source text (hex string).
    pub source_hash: String,
    /// Display label for the source ("builtin" or the path).
    pub label: String,
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// The document could not be parsed.
    Parse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(
                    f,
                    "unknown file extension '.{}' (expected .json, .yaml or .yml)",
                    ext
                ),
                None => write!(f, "file has no extension (expected .json, .yaml or .yml)"),
            },
            InputError::Parse { message } => write!(f, "parse error: {}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads a configuration, or the bundled one when `path` is `None`.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use waymark_cli::input::load_config;
///
/// let result = load_config(Some(Path::new("collection.yaml"))).unwrap();
/// println!("Loaded {} config", result.source_kind);
/// ```
pub fn load_config(path: Option<&Path>) -> Result<LoadResult, InputError> {
    let Some(path) = path else {
        return Ok(LoadResult {
            config: CollectionConfig::builtin(),
            source_kind: SourceKind::Builtin,
            source_hash: blake3::hash(BUILTIN_CONFIG.as_bytes()).to_hex().to_string(),
            label: "builtin".to_string(),
        });
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    let source_kind = match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => SourceKind::Json,
        Some(ext) if YAML_EXTENSIONS.contains(&ext) => SourceKind::Yaml,
        _ => return Err(InputError::UnknownExtension { extension }),
    };

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let parsed = match source_kind {
        SourceKind::Yaml => CollectionConfig::from_yaml(&content),
        _ => CollectionConfig::from_json(&content),
    };
    let config = parsed.map_err(|e| InputError::Parse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        config,
        source_kind,
        source_hash,
        label: path.display().to_string(),
    })
}
