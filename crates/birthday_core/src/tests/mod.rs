//! Integration tests for the birthday simulation core
//!
//! Tests are organized by topic:
//! - `convergence` - Monotonicity of the exact curve and Monte Carlo agreement
//! - `sweep` - Sweep ordering, length, determinism, cancellation and failures

mod sweep;
