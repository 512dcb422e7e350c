//! Terminal-independent description of the probability chart.
//!
//! The controller hands a [`PlotModel`] to the chart component; building one
//! needs no terminal, so the render contract can be tested on its own.

use birthday_core::SweepResult;

pub const X_AXIS_TITLE: &str = "Number of people";
pub const Y_AXIS_TITLE: &str = "Probability of unique birthdays";

pub const THEORETICAL_LABEL: &str = "Theoretical prob.";
pub const EMPIRICAL_LABEL: &str = "Empirical prob.";
pub const THRESHOLD_LABEL: &str = "0.5 threshold";

/// Probability marked by the horizontal reference line
pub const THRESHOLD: f64 = 0.5;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Plain line
    Line,
    /// Markers at each point, joined by a line
    MarkedLine,
    /// Reference line spanning the x range
    Threshold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotModel {
    pub series: Vec<Series>,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Trial count the empirical series was sampled with
    pub trials: u32,
    /// First group size below the threshold, if the range reaches it
    pub crossing: Option<u32>,
}

impl PlotModel {
    pub fn from_sweep(result: &SweepResult) -> Self {
        let x_min = result.group_sizes.first().copied().unwrap_or(0) as f64;
        let x_max = result.group_sizes.last().copied().unwrap_or(0) as f64;

        let theoretical = result
            .points()
            .map(|(n, p, _)| (n as f64, p))
            .collect();
        let empirical = result
            .points()
            .map(|(n, _, e)| (n as f64, e))
            .collect();

        Self {
            series: vec![
                Series {
                    label: THEORETICAL_LABEL,
                    style: SeriesStyle::Line,
                    points: theoretical,
                },
                Series {
                    label: EMPIRICAL_LABEL,
                    style: SeriesStyle::MarkedLine,
                    points: empirical,
                },
                Series {
                    label: THRESHOLD_LABEL,
                    style: SeriesStyle::Threshold,
                    points: vec![(x_min, THRESHOLD), (x_max, THRESHOLD)],
                },
            ],
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            x_bounds: [x_min, x_max],
            y_bounds: [0.0, 1.0],
            trials: result.trials.get(),
            crossing: result.threshold_crossing(THRESHOLD),
        }
    }

    pub fn series(&self, style: SeriesStyle) -> Option<&Series> {
        self.series.iter().find(|s| s.style == style)
    }
}
