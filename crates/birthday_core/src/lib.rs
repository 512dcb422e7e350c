//! Birthday paradox simulation library
//!
//! This crate compares the closed-form probability that every member of a
//! group has a distinct birthday against a Monte Carlo estimate of the same
//! quantity. It provides:
//! - The exact falling-factorial probability for a group size
//! - A single-trial sampler driven by an explicit random source
//! - A Monte Carlo estimator aggregating many trials
//! - A sweep over a range of group sizes producing index-aligned results
//!
//! # Example
//!
//! ```ignore
//! use birthday_core::{SweepConfig, TrialCount, run_sweep};
//!
//! let trials = TrialCount::new(1_000)?;
//! let result = run_sweep(&SweepConfig::default(), trials)?;
//! assert_eq!(result.len(), 25);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod estimator;
pub mod probability;
pub mod sampler;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod error;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{
    DAYS_IN_YEAR, DEFAULT_SEED, MAX_GROUP_SIZE, MIN_GROUP_SIZE, SweepConfig, TrialBounds,
    TrialCount,
};
pub use error::{InputError, SweepError, TrialCountError};
pub use estimator::estimate_unique_probability;
pub use probability::{
    collision_probability, exact_probability, threshold_crossing, unique_birthday_product,
};
pub use sampler::sample_unique_birthdays;
pub use sweep::{SweepProgress, SweepResult, run_sweep, run_sweep_with_rng};
