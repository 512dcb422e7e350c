//! Bounded, stepped trial-count control with deferred updates.
//!
//! Adjustments only move a pending value. The pending value is committed when
//! the user presses Enter or stops adjusting for the settle delay, so a burst
//! of key repeats triggers one sweep instead of one per step.

use std::time::{Duration, Instant};

use birthday_core::{TrialBounds, TrialCount, TrialCountError};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_count;
use crate::util::styles::{HEADER_COLOR, PENDING_COLOR};

/// Idle time after the last adjustment before the pending value is applied
pub const SETTLE_DELAY: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderInput {
    StepUp,
    StepDown,
    Min,
    Max,
    /// Apply the pending value now
    Commit,
}

impl SliderInput {
    fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(SliderInput::StepUp),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(SliderInput::StepDown),
            KeyCode::Home => Some(SliderInput::Min),
            KeyCode::End => Some(SliderInput::Max),
            KeyCode::Enter => Some(SliderInput::Commit),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TrialSlider {
    bounds: TrialBounds,
    committed: u32,
    pending: u32,
    last_adjusted: Option<Instant>,
    commit_requested: bool,
}

impl TrialSlider {
    /// Start at the lower bound
    pub fn new(bounds: TrialBounds) -> Self {
        Self {
            bounds,
            committed: bounds.min(),
            pending: bounds.min(),
            last_adjusted: None,
            commit_requested: false,
        }
    }

    /// Value shown on the control
    pub fn value(&self) -> u32 {
        self.pending
    }

    /// Value last handed to the controller
    pub fn committed(&self) -> u32 {
        self.committed
    }

    pub fn has_pending(&self) -> bool {
        self.pending != self.committed
    }

    /// Trial count for the initial load. Fails if the bounds admit zero.
    pub fn initial(&self) -> Result<TrialCount, TrialCountError> {
        TrialCount::within(self.committed, &self.bounds)
    }

    pub fn apply(&mut self, input: SliderInput, now: Instant) {
        self.pending = match input {
            SliderInput::StepUp => self.bounds.step_up(self.pending),
            SliderInput::StepDown => self.bounds.step_down(self.pending),
            SliderInput::Min => self.bounds.snap(self.bounds.min()),
            SliderInput::Max => self.bounds.top(),
            SliderInput::Commit => {
                self.commit_requested = true;
                return;
            }
        };
        self.last_adjusted = Some(now);
    }

    /// Emit the pending value once it has been released.
    ///
    /// Returns `Ok(None)` while the user is still adjusting or when the released
    /// value equals the last committed one. A released value that is not a
    /// valid trial count is an error and is never recorded as committed.
    pub fn poll_commit(&mut self, now: Instant) -> Result<Option<TrialCount>, TrialCountError> {
        let settled = self
            .last_adjusted
            .is_some_and(|at| now.duration_since(at) >= SETTLE_DELAY);
        if !(self.commit_requested || settled) {
            return Ok(None);
        }

        self.commit_requested = false;
        self.last_adjusted = None;
        if !self.has_pending() {
            return Ok(None);
        }

        let trials = TrialCount::within(self.pending, &self.bounds).inspect_err(|e| {
            tracing::error!(value = self.pending, error = %e, "Slider released an invalid trial count");
        })?;
        self.committed = self.pending;
        tracing::debug!(trials = self.committed, "Trial count committed");
        Ok(Some(trials))
    }

    fn ratio(&self) -> f64 {
        let last = self.bounds.positions().saturating_sub(1);
        if last == 0 {
            return 1.0;
        }
        self.bounds.position_of(self.pending) as f64 / last as f64
    }
}

impl Component for TrialSlider {
    fn handle_key(&mut self, key: KeyEvent, _state: &mut AppState) -> EventResult {
        match SliderInput::from_key(&key) {
            Some(input) => {
                self.apply(input, Instant::now());
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ITERATIONS ");

        let (label, color) = if self.has_pending() {
            (
                format!(
                    "{} trials (applies on release, now {})",
                    format_count(self.pending),
                    format_count(self.committed)
                ),
                PENDING_COLOR,
            )
        } else {
            (format!("{} trials", format_count(self.pending)), HEADER_COLOR)
        };

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .ratio(self.ratio())
            .label(label);

        frame.render_widget(gauge, area);
    }
}
