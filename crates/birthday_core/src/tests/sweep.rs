//! Tests for the group-size sweep
//!
//! These tests verify that:
//! - Output sequences match the input range in length and order
//! - A small fixed-seed sweep matches the known exact values
//! - Sweeps are reproducible, and the stream is not reseeded per group size
//! - Invalid group sizes abort the whole sweep
//! - A progress callback can cancel a sweep

use std::ops::ControlFlow;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{SweepConfig, TrialCount};
use crate::error::{InputError, SweepError};
use crate::estimator::estimate_unique_probability;
use crate::sweep::{SweepProgress, run_sweep, run_sweep_with_rng};

fn trials(n: u32) -> TrialCount {
    TrialCount::new(n).unwrap()
}

#[test]
fn test_output_lengths_match_range() {
    for sizes in [vec![], vec![5], vec![1, 2, 3], vec![2, 10, 23, 40]] {
        let config = SweepConfig::with_group_sizes(sizes.clone());
        let result = run_sweep(&config, trials(50)).unwrap();

        assert_eq!(result.len(), sizes.len());
        assert_eq!(result.theoretical.len(), sizes.len());
        assert_eq!(result.empirical.len(), sizes.len());
        assert_eq!(result.group_sizes, sizes);
    }
}

#[test]
fn test_small_range_end_to_end() {
    let config = SweepConfig::with_group_sizes([1, 2, 3]);
    let result = run_sweep(&config, trials(1_000)).unwrap();

    let expected = [1.0, 0.99726, 0.99180];
    for (i, (n, p, e)) in result.points().enumerate() {
        assert_eq!(n, i as u32 + 1);
        assert!((p - expected[i]).abs() < 1e-4, "theoretical[{i}] = {p}");
        assert!((e - p).abs() <= 0.03, "empirical[{i}] = {e}, theoretical = {p}");
    }
    assert_eq!(result.empirical[0], 1.0);
}

#[test]
fn test_default_sweep_crosses_half_at_23() {
    let result = run_sweep(&SweepConfig::default(), trials(50)).unwrap();
    assert_eq!(result.len(), 25);
    assert_eq!(result.threshold_crossing(0.5), Some(23));
}

#[test]
fn test_sweep_is_reproducible() {
    let config = SweepConfig::default();
    let first = run_sweep(&config, trials(250)).unwrap();
    let second = run_sweep(&config, trials(250)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_seed_changes_empirical_only() {
    let base = SweepConfig::with_group_sizes(10..=20);
    let other = SweepConfig {
        seed: 99,
        ..base.clone()
    };

    let first = run_sweep(&base, trials(450)).unwrap();
    let second = run_sweep(&other, trials(450)).unwrap();

    assert_eq!(first.theoretical, second.theoretical);
    assert_ne!(first.empirical, second.empirical);
}

#[test]
fn test_stream_continues_across_group_sizes() {
    let config = SweepConfig::with_group_sizes([20, 23]);
    let result = run_sweep(&config, trials(650)).unwrap();

    // Replay the same stream by hand: one seed, no reseed between sizes
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let first = estimate_unique_probability(&mut rng, 20, trials(650), config.days_in_year);
    let second = estimate_unique_probability(&mut rng, 23, trials(650), config.days_in_year);

    assert_eq!(result.empirical, vec![first, second]);
}

#[test]
fn test_zero_group_size_aborts_sweep() {
    let config = SweepConfig::with_group_sizes([0, 1, 2]);
    let mut calls = 0;
    let mut rng = SmallRng::seed_from_u64(1);

    let err = run_sweep_with_rng(&mut rng, &config, trials(50), |_| {
        calls += 1;
        ControlFlow::Continue(())
    })
    .unwrap_err();

    assert_eq!(err, SweepError::Input(InputError::GroupSizeTooSmall(0)));
    assert_eq!(calls, 0);
}

#[test]
fn test_unordered_group_sizes_rejected() {
    let config = SweepConfig::with_group_sizes([1, 3, 3]);
    let err = run_sweep(&config, trials(50)).unwrap_err();
    assert_eq!(
        err,
        SweepError::Input(InputError::UnorderedGroupSizes {
            index: 2,
            previous: 3,
            current: 3,
        })
    );
}

#[test]
fn test_group_sizes_beyond_calendar_are_zero() {
    let config = SweepConfig {
        group_sizes: vec![2, 3, 4],
        days_in_year: 3,
        seed: 1,
    };
    let result = run_sweep(&config, trials(50)).unwrap();

    assert_eq!(result.theoretical[2], 0.0);
    assert_eq!(result.empirical[2], 0.0);
}

#[test]
fn test_progress_reports_each_group_size() {
    let config = SweepConfig::with_group_sizes([1, 2, 3, 4]);
    let mut seen = Vec::new();
    let mut rng = SmallRng::seed_from_u64(1);

    run_sweep_with_rng(&mut rng, &config, trials(50), |progress| {
        seen.push(progress);
        ControlFlow::Continue(())
    })
    .unwrap();

    let expected: Vec<SweepProgress> = (1..=4)
        .map(|completed| SweepProgress {
            completed,
            total: 4,
        })
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_break_cancels_sweep() {
    let config = SweepConfig::default();
    let mut rng = SmallRng::seed_from_u64(1);

    let err = run_sweep_with_rng(&mut rng, &config, trials(50), |progress| {
        if progress.completed == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .unwrap_err();

    assert_eq!(err, SweepError::Cancelled);
}
