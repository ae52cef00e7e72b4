//! End-to-end rendering of generated records against a scratch asset tree.

use std::path::Path;

use image::{Rgba, RgbaImage};
use waymark_backend_image::png::{write_rgba_to_vec_with_hash, PngConfig};
use waymark_backend_image::{asset_path, render_record, ImageError};
use waymark_backend_metadata::generate_collection;
use waymark_spec::CollectionConfig;

fn small_config() -> CollectionConfig {
    let mut config = CollectionConfig::builtin();
    config.canvas.width = 16;
    config.canvas.height = 16;
    config
}

/// Writes one 4x4 asset per trait, each with a distinct opaque pixel at a
/// layer-specific position.
fn write_assets(config: &CollectionConfig, root: &Path) {
    for (li, layer) in config.layers.iter().enumerate() {
        for (ti, t) in layer.traits.iter().enumerate() {
            let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
            img.put_pixel(li as u32 % 4, ti as u32 % 4, Rgba([li as u8 * 30, ti as u8 * 25, 90, 255]));
            let path = asset_path(root, layer, t);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            img.save(&path).unwrap();
        }
    }
}

#[test]
fn test_render_is_deterministic() {
    let config = small_config();
    let dir = tempfile::tempdir().unwrap();
    write_assets(&config, dir.path());

    let collection = generate_collection(&config, "render", "2026-01-01T00:00:00Z").unwrap();
    let record = collection.record(1).unwrap();

    let first = render_record(&config, record, dir.path()).unwrap();
    let second = render_record(&config, record, dir.path()).unwrap();
    assert_eq!(first.dimensions(), (16, 16));

    let (bytes_a, hash_a) = write_rgba_to_vec_with_hash(&first, &PngConfig::default()).unwrap();
    let (bytes_b, hash_b) = write_rgba_to_vec_with_hash(&second, &PngConfig::default()).unwrap();
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(hash_a, hash_b);
}

#[test]
fn test_render_reports_all_missing_layers() {
    let config = small_config();
    let dir = tempfile::tempdir().unwrap();

    let collection = generate_collection(&config, "missing", "2026-01-01T00:00:00Z").unwrap();
    let record = collection.record(1).unwrap();

    match render_record(&config, record, dir.path()) {
        Err(ImageError::MissingAssets(missing)) => assert_eq!(missing.len(), 7),
        other => panic!("expected missing assets, got {:?}", other.map(|i| i.dimensions())),
    }
}
