//! State machine binding the trial-count parameter to sweeps and renders.
//!
//! The controller performs no I/O. Each [`Message`] moves it between
//! [`ControllerState::Idle`] and [`ControllerState::Recomputing`] and yields at
//! most one [`Command`] for the app to execute.

use birthday_core::{SweepResult, TrialCount};

use crate::plot::PlotModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for a parameter change
    Idle,
    /// A sweep for `generation` is in flight
    Recomputing { generation: u64, trials: TrialCount },
}

#[derive(Debug)]
pub enum Message {
    /// Initial load of the session
    Load,
    /// The widget committed a new trial count
    TrialCountChanged(TrialCount),
    SweepCompleted { generation: u64, result: SweepResult },
    SweepFailed { generation: u64, message: String },
    SweepCancelled { generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunSweep { generation: u64, trials: TrialCount },
    Render(PlotModel),
    ReportError(String),
}

#[derive(Debug)]
pub struct Controller {
    state: ControllerState,
    trials: TrialCount,
    generation: u64,
}

impl Controller {
    pub fn new(trials: TrialCount) -> Self {
        Self {
            state: ControllerState::Idle,
            trials,
            generation: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Most recently requested trial count
    pub fn trials(&self) -> TrialCount {
        self.trials
    }

    pub fn is_recomputing(&self) -> bool {
        matches!(self.state, ControllerState::Recomputing { .. })
    }

    pub fn update(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::Load => Some(self.start_sweep()),

            Message::TrialCountChanged(trials) => {
                if trials == self.trials {
                    return None;
                }
                if let ControllerState::Recomputing { generation, .. } = self.state {
                    tracing::debug!(generation, "Superseding in-flight sweep");
                }
                self.trials = trials;
                Some(self.start_sweep())
            }

            Message::SweepCompleted { generation, result } => {
                if !self.is_current(generation) {
                    tracing::debug!(generation, "Dropping stale sweep result");
                    return None;
                }
                self.state = ControllerState::Idle;
                Some(Command::Render(PlotModel::from_sweep(&result)))
            }

            Message::SweepFailed {
                generation,
                message,
            } => {
                if !self.is_current(generation) {
                    return None;
                }
                self.state = ControllerState::Idle;
                Some(Command::ReportError(message))
            }

            Message::SweepCancelled { generation } => {
                if self.is_current(generation) {
                    self.state = ControllerState::Idle;
                }
                None
            }
        }
    }

    fn start_sweep(&mut self) -> Command {
        self.generation += 1;
        self.state = ControllerState::Recomputing {
            generation: self.generation,
            trials: self.trials,
        };
        Command::RunSweep {
            generation: self.generation,
            trials: self.trials,
        }
    }

    /// Whether `generation` is the sweep currently in flight
    pub fn is_current(&self, generation: u64) -> bool {
        matches!(self.state, ControllerState::Recomputing { generation: g, .. } if g == generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthday_core::{SweepConfig, run_sweep};

    fn trials(n: u32) -> TrialCount {
        TrialCount::new(n).unwrap()
    }

    fn sweep(n: u32) -> SweepResult {
        run_sweep(&SweepConfig::with_group_sizes(1..=5), trials(n)).unwrap()
    }

    #[test]
    fn test_load_starts_sweep() {
        let mut controller = Controller::new(trials(50));
        let command = controller.update(Message::Load);

        assert_eq!(
            command,
            Some(Command::RunSweep {
                generation: 1,
                trials: trials(50)
            })
        );
        assert_eq!(
            controller.state(),
            ControllerState::Recomputing {
                generation: 1,
                trials: trials(50)
            }
        );
    }

    #[test]
    fn test_completion_renders_and_returns_to_idle() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);

        let result = sweep(50);
        let expected = PlotModel::from_sweep(&result);
        let command = controller.update(Message::SweepCompleted {
            generation: 1,
            result,
        });

        assert_eq!(command, Some(Command::Render(expected)));
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_change_while_idle_starts_new_sweep() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);
        controller.update(Message::SweepCompleted {
            generation: 1,
            result: sweep(50),
        });

        let command = controller.update(Message::TrialCountChanged(trials(250)));
        assert_eq!(
            command,
            Some(Command::RunSweep {
                generation: 2,
                trials: trials(250)
            })
        );
        assert_eq!(controller.trials(), trials(250));
    }

    #[test]
    fn test_unchanged_value_is_ignored() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);
        controller.update(Message::SweepCompleted {
            generation: 1,
            result: sweep(50),
        });

        assert_eq!(controller.update(Message::TrialCountChanged(trials(50))), None);
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_change_while_recomputing_supersedes() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);

        let command = controller.update(Message::TrialCountChanged(trials(450)));
        assert_eq!(
            command,
            Some(Command::RunSweep {
                generation: 2,
                trials: trials(450)
            })
        );

        // The first sweep finishing late must not be drawn
        let stale = controller.update(Message::SweepCompleted {
            generation: 1,
            result: sweep(50),
        });
        assert_eq!(stale, None);
        assert!(controller.is_recomputing());

        let fresh = sweep(450);
        let expected = PlotModel::from_sweep(&fresh);
        let command = controller.update(Message::SweepCompleted {
            generation: 2,
            result: fresh,
        });
        assert_eq!(command, Some(Command::Render(expected)));
        assert!(!controller.is_recomputing());
    }

    #[test]
    fn test_failure_reports_without_render() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);

        let command = controller.update(Message::SweepFailed {
            generation: 1,
            message: "boom".to_string(),
        });
        assert_eq!(command, Some(Command::ReportError("boom".to_string())));
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_stale_failure_and_cancel_are_ignored() {
        let mut controller = Controller::new(trials(50));
        controller.update(Message::Load);
        controller.update(Message::TrialCountChanged(trials(250)));

        assert_eq!(
            controller.update(Message::SweepFailed {
                generation: 1,
                message: "old".to_string(),
            }),
            None
        );
        assert_eq!(controller.update(Message::SweepCancelled { generation: 1 }), None);
        assert_eq!(
            controller.state(),
            ControllerState::Recomputing {
                generation: 2,
                trials: trials(250)
            }
        );
    }
}
