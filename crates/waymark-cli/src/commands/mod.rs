//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod plan;
pub mod validate;

mod reporting;

/// Exit code for configuration load or validation failures.
pub const EXIT_CONFIG_ERROR: u8 = 1;

/// Exit code for failures after validation (consistency, assets, I/O).
pub const EXIT_GENERATION_ERROR: u8 = 2;
