//! Errors from image rendering.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use waymark_spec::BackendError;

use crate::png::PngError;

/// Why an asset reference could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReason {
    /// The render order names a layer the record has no attribute for.
    NoAttribute,
    /// The layer is not declared in the configuration.
    UnknownLayer,
    /// The trait is not declared in its layer.
    UnknownTrait,
    /// The asset file does not exist.
    FileNotFound,
}

/// One unresolved asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub layer: String,
    pub value: Option<String>,
    pub path: Option<PathBuf>,
    pub reason: MissingReason,
}

impl fmt::Display for MissingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or("?");
        match self.reason {
            MissingReason::NoAttribute => write!(f, "record has no '{}' attribute", self.layer),
            MissingReason::UnknownLayer => write!(f, "unknown layer '{}'", self.layer),
            MissingReason::UnknownTrait => {
                write!(f, "unknown trait '{}' in layer '{}'", value, self.layer)
            }
            MissingReason::FileNotFound => match &self.path {
                Some(path) => write!(f, "{} / {}: {} not found", self.layer, value, path.display()),
                None => write!(f, "{} / {}: file not found", self.layer, value),
            },
        }
    }
}

/// Errors from resolving and compositing record images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Every unresolved reference for one record.
    #[error("{} missing asset(s): {}", .0.len(), join(.0))]
    MissingAssets(Vec<MissingAsset>),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid canvas {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

fn join(missing: &[MissingAsset]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BackendError for ImageError {
    fn code(&self) -> &'static str {
        match self {
            ImageError::MissingAssets(_) => "IMAGE_001",
            ImageError::Decode { .. } => "IMAGE_002",
            ImageError::Png(_) => "IMAGE_003",
            ImageError::Io(_) => "IMAGE_004",
            ImageError::InvalidCanvas { .. } => "IMAGE_005",
        }
    }

    fn category(&self) -> &'static str {
        "image"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_assets_message_lists_all() {
        let err = ImageError::MissingAssets(vec![
            MissingAsset {
                layer: "Aura".to_string(),
                value: None,
                path: None,
                reason: MissingReason::UnknownLayer,
            },
            MissingAsset {
                layer: "Eyes".to_string(),
                value: Some("Glass".to_string()),
                path: None,
                reason: MissingReason::UnknownTrait,
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 missing asset(s)"));
        assert!(msg.contains("unknown layer 'Aura'"));
        assert!(msg.contains("unknown trait 'Glass' in layer 'Eyes'"));
        assert_eq!(err.code(), "IMAGE_001");
        assert_eq!(err.category(), "image");
    }
}
