//! Closed-form probability that a group's birthdays are all distinct.

use crate::error::InputError;

/// Product ∏_{i=0}^{n-1} (days − i) / days.
///
/// Total over its inputs: an empty group gives 1.0 and a group larger than
/// the calendar gives exactly 0.0 (pigeonhole).
pub fn unique_birthday_product(group_size: u32, days_in_year: u32) -> f64 {
    if group_size > days_in_year {
        return 0.0;
    }

    let days = days_in_year as f64;
    (0..group_size)
        .map(|i| (days_in_year - i) as f64 / days)
        .product()
}

/// Probability that `group_size` uniformly distributed birthdays are pairwise distinct.
pub fn exact_probability(group_size: u32, days_in_year: u32) -> Result<f64, InputError> {
    if days_in_year == 0 {
        return Err(InputError::NoDays);
    }
    if group_size == 0 {
        return Err(InputError::GroupSizeTooSmall(group_size));
    }
    Ok(unique_birthday_product(group_size, days_in_year))
}

/// Probability that at least two people in the group share a birthday.
pub fn collision_probability(group_size: u32, days_in_year: u32) -> Result<f64, InputError> {
    exact_probability(group_size, days_in_year).map(|p| 1.0 - p)
}

/// First group size whose probability falls below `threshold`.
pub fn threshold_crossing(group_sizes: &[u32], probabilities: &[f64], threshold: f64) -> Option<u32> {
    group_sizes
        .iter()
        .zip(probabilities)
        .find(|(_, p)| **p < threshold)
        .map(|(n, _)| *n)
}
