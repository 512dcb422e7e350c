//! Sweep of exact and Monte Carlo probabilities across a range of group sizes.
//!
//! The random source is seeded once per sweep, never per group size, so later
//! group sizes continue the same stream. For a fixed seed, trial count and
//! range the whole [`SweepResult`] is reproducible.

use std::ops::ControlFlow;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{SweepConfig, TrialCount};
use crate::error::{InputError, SweepError};
use crate::estimator::estimate_unique_probability;
use crate::probability::{exact_probability, threshold_crossing};

/// Progress reported after each group size of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepProgress {
    pub completed: usize,
    pub total: usize,
}

/// Index-aligned theoretical and empirical probabilities for one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub group_sizes: Vec<u32>,
    pub theoretical: Vec<f64>,
    pub empirical: Vec<f64>,
    pub trials: TrialCount,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.group_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_sizes.is_empty()
    }

    /// `(group_size, theoretical, empirical)` in ascending group-size order
    pub fn points(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.group_sizes
            .iter()
            .zip(&self.theoretical)
            .zip(&self.empirical)
            .map(|((&n, &p), &e)| (n, p, e))
    }

    /// First group size whose theoretical probability is below `threshold`
    pub fn threshold_crossing(&self, threshold: f64) -> Option<u32> {
        threshold_crossing(&self.group_sizes, &self.theoretical, threshold)
    }
}

/// Run a sweep with a generator freshly seeded from `config.seed`.
pub fn run_sweep(config: &SweepConfig, trials: TrialCount) -> Result<SweepResult, SweepError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    run_sweep_with_rng(&mut rng, config, trials, |_| ControlFlow::Continue(()))
}

/// Run a sweep drawing from the supplied random source.
///
/// `on_progress` is called after each group size; returning `Break` aborts the
/// sweep with [`SweepError::Cancelled`]. Any invalid group size aborts before
/// sampling starts, so a failed sweep never yields partial output.
pub fn run_sweep_with_rng<R, F>(
    rng: &mut R,
    config: &SweepConfig,
    trials: TrialCount,
    mut on_progress: F,
) -> Result<SweepResult, SweepError>
where
    R: Rng + ?Sized,
    F: FnMut(SweepProgress) -> ControlFlow<()>,
{
    let group_sizes = &config.group_sizes;
    validate_ascending(group_sizes)?;

    let theoretical = group_sizes
        .iter()
        .map(|&n| exact_probability(n, config.days_in_year))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        group_sizes = group_sizes.len(),
        trials = trials.get(),
        days_in_year = config.days_in_year,
        "Starting sweep"
    );

    let total = group_sizes.len();
    let mut empirical = Vec::with_capacity(total);
    for (i, &n) in group_sizes.iter().enumerate() {
        empirical.push(estimate_unique_probability(
            rng,
            n,
            trials,
            config.days_in_year,
        ));

        let progress = SweepProgress {
            completed: i + 1,
            total,
        };
        if on_progress(progress).is_break() {
            tracing::debug!(completed = i + 1, total, "Sweep cancelled");
            return Err(SweepError::Cancelled);
        }
    }

    tracing::debug!(trials = trials.get(), "Sweep complete");

    Ok(SweepResult {
        group_sizes: group_sizes.clone(),
        theoretical,
        empirical,
        trials,
    })
}

fn validate_ascending(group_sizes: &[u32]) -> Result<(), InputError> {
    for (index, pair) in group_sizes.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(InputError::UnorderedGroupSizes {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
