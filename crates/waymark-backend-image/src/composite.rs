//! Layer compositing onto a transparent canvas.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;
use waymark_spec::{CollectionConfig, GeneratedRecord};

use crate::error::ImageError;
use crate::resolve::{resolve_layers, ResolvedLayer};

/// Flattens `layers` bottom-to-top onto a transparent `width` x `height` canvas.
///
/// Layers whose dimensions differ from the canvas are resized to fit it
/// exactly before being alpha-blended at the origin.
pub fn composite_layers(
    layers: &[ResolvedLayer],
    width: u32,
    height: u32,
) -> Result<RgbaImage, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidCanvas { width, height });
    }

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for layer in layers {
        let img = load_rgba(&layer.path)?;
        let img = if img.dimensions() != (width, height) {
            imageops::resize(&img, width, height, FilterType::Triangle)
        } else {
            img
        };
        imageops::overlay(&mut canvas, &img, 0, 0);
    }
    Ok(canvas)
}

/// Resolves and composites one record's image.
pub fn render_record(
    config: &CollectionConfig,
    record: &GeneratedRecord,
    assets_root: &Path,
) -> Result<RgbaImage, ImageError> {
    let layers = resolve_layers(config, record, assets_root)?;
    debug!(id = record.id, layers = layers.len(), "compositing record");
    composite_layers(&layers, config.canvas.width, config.canvas.height)
}

fn load_rgba(path: &Path) -> Result<RgbaImage, ImageError> {
    let img = image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}
