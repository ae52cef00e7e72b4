//! Asset resolution: record attributes to layer files, in render order.

use std::path::{Path, PathBuf};

use waymark_spec::{CollectionConfig, GeneratedRecord, Layer, Trait};

use crate::error::{ImageError, MissingAsset, MissingReason};

/// A record attribute resolved to an asset on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayer {
    /// Layer name.
    pub layer: String,
    /// Trait display name.
    pub value: String,
    /// Asset file path.
    pub path: PathBuf,
}

/// Path of a trait's asset under `assets_root`.
///
/// `<assets_root>/<layer directory>/<trait file>`, where the directory and
/// file fall back to normalized names when no override is configured.
pub fn asset_path(assets_root: &Path, layer: &Layer, t: &Trait) -> PathBuf {
    assets_root
        .join(layer.asset_directory())
        .join(t.asset_file())
}

/// Resolves every layer of `record` in the configured render order.
///
/// Lookups are exact matches on layer and trait names. All misses are
/// collected and returned together as [`ImageError::MissingAssets`].
pub fn resolve_layers(
    config: &CollectionConfig,
    record: &GeneratedRecord,
    assets_root: &Path,
) -> Result<Vec<ResolvedLayer>, ImageError> {
    let mut resolved = Vec::with_capacity(config.canvas.render_order.len());
    let mut missing = Vec::new();

    for layer_name in &config.canvas.render_order {
        let miss = |value: Option<&str>, path: Option<PathBuf>, reason| MissingAsset {
            layer: layer_name.clone(),
            value: value.map(str::to_string),
            path,
            reason,
        };

        let Some(attr) = record.attribute(layer_name) else {
            missing.push(miss(None, None, MissingReason::NoAttribute));
            continue;
        };
        let Some(layer) = config.layer(layer_name) else {
            missing.push(miss(Some(&attr.value), None, MissingReason::UnknownLayer));
            continue;
        };
        let Some(t) = layer.trait_named(&attr.value) else {
            missing.push(miss(Some(&attr.value), None, MissingReason::UnknownTrait));
            continue;
        };

        let path = asset_path(assets_root, layer, t);
        if !path.is_file() {
            missing.push(miss(Some(&attr.value), Some(path), MissingReason::FileNotFound));
            continue;
        }

        resolved.push(ResolvedLayer {
            layer: layer.name.clone(),
            value: t.name.clone(),
            path,
        });
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(ImageError::MissingAssets(missing))
    }
}
