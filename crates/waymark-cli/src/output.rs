//! Artifact writing under an output root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use waymark_spec::{pad_id, ArtifactKind, ArtifactResult};

/// Directory for per-record metadata.
pub const METADATA_DIR: &str = "metadata";

/// Directory for per-record images.
pub const IMAGES_DIR: &str = "images";

/// Collection summary filename.
pub const SUMMARY_FILENAME: &str = "summary.json";

/// Relative path of a record's metadata file.
pub fn metadata_path(id: u32, width: usize) -> PathBuf {
    Path::new(METADATA_DIR).join(format!("{}.json", pad_id(id, width)))
}

/// Relative path of a record's image file.
pub fn image_path(id: u32, width: usize) -> PathBuf {
    Path::new(IMAGES_DIR).join(format!("{}.png", pad_id(id, width)))
}

/// Writes `bytes` to `out_root/rel_path`, creating parent directories.
pub fn write_artifact(
    out_root: &Path,
    rel_path: &Path,
    kind: ArtifactKind,
    bytes: &[u8],
) -> Result<ArtifactResult> {
    let full = out_root.join(rel_path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&full, bytes).with_context(|| format!("Failed to write {}", full.display()))?;
    Ok(ArtifactResult::new(kind, rel_path, bytes))
}
