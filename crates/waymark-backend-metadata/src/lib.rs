//! Waymark Metadata Generation Backend
//!
//! This crate turns a validated collection configuration and a seed string
//! into the full set of collection records. All output is identical given
//! the same configuration and seed.
//!
//! # Pipeline
//!
//! - **Allocation**: exact Hybrid/Human/Creature counts per station
//! - **Blueprints**: expanded, shuffled and re-indexed member skeletons
//! - **Drafting**: one trait per layer, weighted by rarity
//! - **Scoring**: additive score resolved to a tier
//! - **Short codes**: four characters from a 33-symbol alphabet
//!
//! # Example
//!
//! ```
//! use waymark_backend_metadata::generate_collection;
//! use waymark_spec::CollectionConfig;
//!
//! let config = CollectionConfig::builtin();
//! let collection = generate_collection(&config, "test-seed-deterministic", "2026-01-01T00:00:00Z").unwrap();
//! assert_eq!(collection.records.len(), 333);
//! assert_eq!(collection.records[0].id, 1);
//! ```
//!
//! # Determinism
//!
//! - One [`SeededStream`] is threaded through every stage by `&mut`
//! - The draw order is fixed and versioned by [`DRAW_CONTRACT_VERSION`]
//! - No clock reads: the caller supplies the record timestamp

pub mod assemble;
pub mod blueprint;
pub mod code;
pub mod draft;
pub mod error;
pub mod plan;
pub mod rng;
pub mod summary;
pub mod tier;

// Re-export main types for convenience
pub use assemble::{assemble_record, expected_draws, generate_collection, Collection};
pub use blueprint::{build_blueprints, expand_plan, Blueprint};
pub use code::{generate_short_code, SHORT_CODE_ALPHABET, SHORT_CODE_LENGTH};
pub use draft::draft_attributes;
pub use error::GenerateError;
pub use plan::{plan_allocation, split_group, AllocationPlan, KindCount, StationPlan};
pub use rng::{shuffle, SeededStream};
pub use summary::{summarize, CollectionSummary, DRAW_CONTRACT_VERSION};
pub use tier::{resolve_tier, total_score};
