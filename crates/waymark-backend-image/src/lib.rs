//! Waymark Image Backend
//!
//! Resolves a record's attributes to layer assets and flattens them into one
//! PNG per record.
//!
//! # Features
//!
//! - **Resolution**: exact (layer, trait) lookup in render order, with every
//!   miss reported at once
//! - **Compositing**: transparent canvas, layers resized to fit and blended
//!   bottom-to-top
//! - **Deterministic PNG**: fixed compression and filter settings
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use waymark_backend_image::{render_record, png::{write_rgba, PngConfig}};
//! use waymark_backend_metadata::generate_collection;
//! use waymark_spec::CollectionConfig;
//!
//! let config = CollectionConfig::builtin();
//! let collection = generate_collection(&config, "seed", "2026-01-01T00:00:00Z").unwrap();
//! let image = render_record(&config, &collection.records[0], Path::new("assets")).unwrap();
//! write_rgba(&image, Path::new("001.png"), &PngConfig::default()).unwrap();
//! ```

pub mod composite;
pub mod error;
pub mod png;
pub mod resolve;

pub use composite::{composite_layers, render_record};
pub use error::{ImageError, MissingAsset, MissingReason};
pub use png::{PngConfig, PngError};
pub use resolve::{asset_path, resolve_layers, ResolvedLayer};
