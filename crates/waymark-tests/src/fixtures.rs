//! Test fixtures: configurations, generated collections and scratch asset
//! trees.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;
use waymark_backend_image::asset_path;
use waymark_backend_metadata::{generate_collection, Collection};
use waymark_spec::CollectionConfig;

/// Seed used for the pinned reference run.
pub const REFERENCE_SEED: &str = "test-seed-deterministic";

/// Timestamp injected into every fixture run.
pub const FIXED_TIMESTAMP: &str = "2026-01-01T00:00:00Z";

/// Generates the builtin collection for `seed` at [`FIXED_TIMESTAMP`].
pub fn builtin_collection(seed: &str) -> Collection {
    generate_collection(&CollectionConfig::builtin(), seed, FIXED_TIMESTAMP)
        .expect("builtin config must generate")
}

/// Compact JSON of the record array, in id order.
pub fn records_json(config: &CollectionConfig, seed: &str) -> Vec<u8> {
    let collection =
        generate_collection(config, seed, FIXED_TIMESTAMP).expect("config must generate");
    serde_json::to_vec(&collection.records).expect("records must serialize")
}

/// Pretty JSON of the collection summary.
pub fn summary_json(config: &CollectionConfig, seed: &str) -> Vec<u8> {
    let collection =
        generate_collection(config, seed, FIXED_TIMESTAMP).expect("config must generate");
    serde_json::to_vec_pretty(&collection.summary).expect("summary must serialize")
}

/// The builtin configuration shrunk to a 16x16 canvas.
pub fn small_canvas_config() -> CollectionConfig {
    let mut config = CollectionConfig::builtin();
    config.canvas.width = 16;
    config.canvas.height = 16;
    config
}

/// A temporary project with a configuration file and a full asset tree.
pub struct ProjectFixture {
    pub root: TempDir,
    pub config: CollectionConfig,
    pub config_path: PathBuf,
    pub assets_dir: PathBuf,
}

impl ProjectFixture {
    /// Writes `config` as JSON and one distinct 16x16 PNG per trait.
    pub fn new(config: CollectionConfig) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_path = root.path().join("collection.json");
        fs::write(
            &config_path,
            config.to_json_pretty().expect("config must serialize"),
        )
        .expect("Failed to write config");

        let assets_dir = root.path().join("assets");
        for (li, layer) in config.layers.iter().enumerate() {
            for (ti, t) in layer.traits.iter().enumerate() {
                let mut img = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
                let color = Rgba([(li * 36) as u8, (ti * 20) as u8, 128, 255]);
                for x in 0..16 {
                    img.put_pixel(x, (li * 2) as u32, color);
                }
                img.put_pixel((ti % 16) as u32, 15, color);
                let path = asset_path(&assets_dir, layer, t);
                fs::create_dir_all(path.parent().expect("asset has a parent"))
                    .expect("Failed to create asset dir");
                img.save(&path).expect("Failed to write asset");
            }
        }

        Self {
            root,
            config,
            config_path,
            assets_dir,
        }
    }

    /// Project root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// A fresh output directory under the project root.
    pub fn out_dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}
