use rand::Rng;

use crate::config::TrialCount;
use crate::sampler::sample_unique_birthdays;

/// Fraction of `trials` sampled groups whose birthdays were all distinct.
///
/// Unbiased for the exact probability; the standard error at `t` trials is
/// about `sqrt(p (1 - p) / t)`.
pub fn estimate_unique_probability<R: Rng + ?Sized>(
    rng: &mut R,
    group_size: u32,
    trials: TrialCount,
    days_in_year: u32,
) -> f64 {
    let unique_count = (0..trials.get())
        .filter(|_| sample_unique_birthdays(&mut *rng, group_size, days_in_year))
        .count();

    unique_count as f64 / trials.get() as f64
}
