//! Waymark End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the generation flows:
//!
//! - Generation: configuration + seed -> records, summary, images
//! - **Determinism**: byte-identical output across runs for the same seed
//! - Properties: record invariants that hold for every seed
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p waymark-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use waymark_tests::determinism::verify_determinism;
//! use waymark_tests::test_determinism;
//!
//! let result = verify_determinism(|| records_json(&config, "seed"), 3);
//! assert!(result.is_deterministic);
//!
//! test_determinism!(builtin_records, {
//!     records_json(&CollectionConfig::builtin(), "seed")
//! });
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{
    assert_deterministic, compute_hash, verify_determinism, verify_hash_determinism,
    DeterminismResult, DiffInfo,
};
