//! Waymark Collection Spec Library
//!
//! This crate provides the types, validation, and hashing for Waymark
//! collection configurations, plus the schema of the records a generation
//! run emits.
//!
//! # Overview
//!
//! A collection configuration declares:
//!
//! - **Layers**: seven attribute dimensions with nine traits each
//! - **Scoring**: a weight per rarity class, strictly increasing
//! - **Tiers**: seven contiguous score brackets covering every achievable score
//! - **Stations**: the twelve narrative stages
//! - **Allocation**: how many members of each kind every station holds
//!
//! # Example
//!
//! ```
//! use waymark_spec::{CollectionConfig, validation::validate_config};
//! use waymark_spec::hash::canonical_config_hash;
//!
//! let config = CollectionConfig::builtin();
//! assert!(validate_config(&config).is_ok());
//!
//! let hash = canonical_config_hash(&config).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`allocation`]: per-station allocation spec and member kinds
//! - [`config`]: configuration document types
//! - [`error`]: error and warning types
//! - [`hash`]: canonical hashing
//! - [`record`]: generated record schema
//! - [`report`]: run report types
//! - [`validation`]: configuration validation

pub mod allocation;
pub mod config;
pub mod error;
pub mod hash;
pub mod record;
pub mod report;
pub mod validation;

// Re-export commonly used types at the crate root
pub use allocation::{AllocationSpec, GroupSpec, MemberKind, RATIO_TOLERANCE};
pub use config::{
    CanvasConfig, CollectionConfig, CollectionMeta, Layer, Rarity, ScoringTable, Station, Tier,
    Trait, CONFIG_VERSION, LAYER_COUNT, STANDARD_COLLECTION_SIZE, STATION_COUNT, TIER_COUNT,
    TRAITS_PER_LAYER,
};
pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use hash::{canonical_config_hash, canonical_records_hash};
pub use record::{pad_id, DraftedAttribute, GeneratedRecord, Provenance, StationRef, CREATOR_SHARE};
pub use report::{ArtifactKind, ArtifactResult, Report, ReportBuilder, ReportError, ReportWarning};
pub use validation::validate_config;
