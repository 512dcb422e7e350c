//! Fixed simulation parameters and the bounded trial-count parameter.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::TrialCountError;

/// Days a birthday can fall on. Every day is equally likely; no leap day.
pub const DAYS_IN_YEAR: u32 = 365;

/// Smallest group size in the default sweep
pub const MIN_GROUP_SIZE: u32 = 1;

/// Largest group size in the default sweep
pub const MAX_GROUP_SIZE: u32 = 25;

/// Seed applied once before every sweep
pub const DEFAULT_SEED: u64 = 1;

/// Bounds and step of the user-adjustable trial count.
///
/// Always `min <= max` and `step > 0`; build custom bounds with [`TrialBounds::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialBounds {
    min: u32,
    max: u32,
    step: u32,
}

impl TrialBounds {
    pub const DEFAULT: TrialBounds = TrialBounds {
        min: 50,
        max: 5050,
        step: 200,
    };

    pub fn new(min: u32, max: u32, step: u32) -> Result<Self, TrialCountError> {
        if min > max {
            return Err(TrialCountError::InvertedBounds { min, max });
        }
        if step == 0 {
            return Err(TrialCountError::ZeroStep);
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Clamp into `[min, max]` and round down onto the grid `min + k * step`.
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        self.min + (clamped - self.min) / self.step * self.step
    }

    /// Largest grid value that does not exceed `max`
    pub fn top(&self) -> u32 {
        self.snap(self.max)
    }

    pub fn step_up(&self, value: u32) -> u32 {
        self.snap(self.snap(value).saturating_add(self.step))
    }

    pub fn step_down(&self, value: u32) -> u32 {
        self.snap(self.snap(value).saturating_sub(self.step))
    }

    /// Number of grid points between the bounds, inclusive
    pub fn positions(&self) -> u32 {
        (self.top() - self.min) / self.step + 1
    }

    /// Zero-based grid index of `value` after snapping
    pub fn position_of(&self, value: u32) -> u32 {
        (self.snap(value) - self.min) / self.step
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for TrialBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of Monte Carlo trials per group size. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrialCount(NonZeroU32);

impl TrialCount {
    pub fn new(value: u32) -> Result<Self, TrialCountError> {
        NonZeroU32::new(value)
            .map(TrialCount)
            .ok_or(TrialCountError::Zero)
    }

    /// Build a trial count that also respects the slider bounds.
    pub fn within(value: u32, bounds: &TrialBounds) -> Result<Self, TrialCountError> {
        if !bounds.contains(value) {
            return Err(TrialCountError::OutOfBounds {
                value,
                min: bounds.min,
                max: bounds.max,
            });
        }
        Self::new(value)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TrialCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters of one sweep across group sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Strictly ascending group sizes
    pub group_sizes: Vec<u32>,
    pub days_in_year: u32,
    pub seed: u64,
}

impl SweepConfig {
    pub fn with_group_sizes(group_sizes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            group_sizes: group_sizes.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            group_sizes: (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).collect(),
            days_in_year: DAYS_IN_YEAR,
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_grid() {
        let bounds = TrialBounds::DEFAULT;
        assert_eq!(bounds.positions(), 26);
        assert_eq!(bounds.top(), 5050);
        assert_eq!(bounds.position_of(50), 0);
        assert_eq!(bounds.position_of(5050), 25);
    }

    #[test]
    fn test_snap_clamps_and_rounds_down() {
        let bounds = TrialBounds::DEFAULT;
        assert_eq!(bounds.snap(0), 50);
        assert_eq!(bounds.snap(10_000), 5050);
        assert_eq!(bounds.snap(449), 250);
        assert_eq!(bounds.snap(450), 450);
    }

    #[test]
    fn test_step_up_and_down_stay_in_bounds() {
        let bounds = TrialBounds::DEFAULT;
        assert_eq!(bounds.step_up(50), 250);
        assert_eq!(bounds.step_up(5050), 5050);
        assert_eq!(bounds.step_down(250), 50);
        assert_eq!(bounds.step_down(50), 50);
    }

    #[test]
    fn test_off_grid_max() {
        let bounds = TrialBounds::new(10, 100, 25).unwrap();
        assert_eq!(bounds.top(), 85);
        assert_eq!(bounds.step_up(85), 85);
        assert_eq!(bounds.positions(), 4);
    }

    #[test]
    fn test_bounds_reject_inverted_range_and_zero_step() {
        assert_eq!(
            TrialBounds::new(100, 50, 10),
            Err(TrialCountError::InvertedBounds { min: 100, max: 50 })
        );
        assert_eq!(TrialBounds::new(50, 100, 0), Err(TrialCountError::ZeroStep));

        let single = TrialBounds::new(70, 70, 10).unwrap();
        assert_eq!(single.snap(0), 70);
        assert_eq!(single.snap(1_000), 70);
        assert_eq!(single.positions(), 1);
    }

    #[test]
    fn test_trial_count_rejects_zero() {
        assert_eq!(TrialCount::new(0), Err(TrialCountError::Zero));
        assert_eq!(TrialCount::new(7).map(TrialCount::get), Ok(7));
    }

    #[test]
    fn test_trial_count_within_bounds() {
        let bounds = TrialBounds::DEFAULT;
        assert!(TrialCount::within(50, &bounds).is_ok());
        assert_eq!(
            TrialCount::within(49, &bounds),
            Err(TrialCountError::OutOfBounds {
                value: 49,
                min: 50,
                max: 5050
            })
        );
    }

    #[test]
    fn test_default_sweep_config() {
        let config = SweepConfig::default();
        assert_eq!(config.group_sizes.len(), 25);
        assert_eq!(config.group_sizes.first(), Some(&1));
        assert_eq!(config.group_sizes.last(), Some(&25));
        assert_eq!(config.days_in_year, 365);
        assert_eq!(config.seed, 1);
    }
}
