//! Waymark CLI library.
//!
//! This crate provides the core functionality for the `waymark` binary:
//! configuration loading, the generate/validate/plan/inspect commands,
//! artifact output and logging setup.

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;
