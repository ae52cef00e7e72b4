//! Determinism testing utilities.
//!
//! Waymark guarantees that the same configuration and seed produce the same
//! records, summary and images. These helpers run a generation closure
//! several times and compare the outputs byte-for-byte.

pub mod core;
#[macro_use]
pub mod macros;

#[cfg(test)]
mod tests;

pub use core::{
    assert_deterministic, compute_hash, verify_determinism, verify_hash_determinism,
    DeterminismResult, DiffInfo,
};
