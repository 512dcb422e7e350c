//! Shared application state read by every component.

use birthday_core::TrialCount;

use crate::controller::Controller;
use crate::plot::PlotModel;

#[derive(Debug)]
pub struct AppState {
    pub controller: Controller,
    /// Chart of the last completed sweep
    pub plot: Option<PlotModel>,
    /// `(completed, total)` group sizes of the in-flight sweep
    pub progress: Option<(usize, usize)>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(trials: TrialCount) -> Self {
        Self {
            controller: Controller::new(trials),
            plot: None,
            progress: None,
            error_message: None,
            exit: false,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Reporting error");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
