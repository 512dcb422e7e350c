use rand::Rng;
use rustc_hash::FxHashSet;

/// Draw one group of birthdays and report whether they are all distinct.
///
/// Within the calendar all `group_size` days are drawn before comparing, so
/// each trial consumes the same amount of entropy regardless of when the first
/// collision occurs. A group larger than the calendar collides by pigeonhole
/// and draws nothing.
pub fn sample_unique_birthdays<R: Rng + ?Sized>(
    rng: &mut R,
    group_size: u32,
    days_in_year: u32,
) -> bool {
    if group_size > days_in_year {
        return false;
    }
    if group_size == 0 {
        return true;
    }

    // The set never holds more than one entry per day
    let capacity = group_size.min(days_in_year) as usize;
    let mut seen = FxHashSet::with_capacity_and_hasher(capacity, Default::default());
    for _ in 0..group_size {
        seen.insert(rng.random_range(0..days_in_year));
    }
    seen.len() == group_size as usize
}
