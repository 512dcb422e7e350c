use std::io;
use std::time::{Duration, Instant};

use birthday_core::{SweepConfig, TrialBounds, TrialCountError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, probability_chart::ProbabilityChart, slider::TrialSlider,
    status_bar::StatusBar,
};
use crate::controller::{Command, Message};
use crate::state::AppState;
use crate::worker::{SweepRequest, SweepResponse, SweepWorker};

/// How long to wait for input before checking the slider and worker again
const TICK_RATE: Duration = Duration::from_millis(50);

pub struct App {
    state: AppState,
    config: SweepConfig,
    slider: TrialSlider,
    chart: ProbabilityChart,
    status_bar: StatusBar,
    worker: SweepWorker,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let slider = TrialSlider::new(TrialBounds::DEFAULT);
        let state = AppState::new(slider.initial()?);

        Ok(Self {
            state,
            config: SweepConfig::default(),
            slider,
            chart: ProbabilityChart::new(),
            status_bar: StatusBar::new(),
            worker: SweepWorker::new(),
        })
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.dispatch(Message::Load);

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.poll_slider(Instant::now())?;
            self.process_worker_responses();
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Slider
                Constraint::Min(0),    // Chart
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.slider.render(frame, chunks[0], &self.state);
        self.chart.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(TICK_RATE)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit {
            tracing::info!("Quit requested");
            self.state.exit = true;
            return;
        }

        if self.slider.handle_key(key, &mut self.state) == EventResult::NotHandled {
            tracing::trace!(?key, "Unhandled key");
        }
    }

    /// Forward a released slider value to the controller
    fn poll_slider(&mut self, now: Instant) -> Result<(), TrialCountError> {
        if let Some(trials) = self.slider.poll_commit(now)? {
            tracing::info!(trials = trials.get(), "Trial count changed");
            self.dispatch(Message::TrialCountChanged(trials));
        }
        Ok(())
    }

    /// Process worker responses.
    fn process_worker_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            let message = match response {
                SweepResponse::Progress {
                    generation,
                    current,
                    total,
                } => {
                    if self.state.controller.is_current(generation) {
                        self.state.progress = Some((current, total));
                    }
                    continue;
                }
                SweepResponse::Complete { generation, result } => {
                    Message::SweepCompleted { generation, result }
                }
                SweepResponse::Cancelled { generation } => Message::SweepCancelled { generation },
                SweepResponse::Error {
                    generation,
                    message,
                } => Message::SweepFailed {
                    generation,
                    message,
                },
            };
            self.dispatch(message);
        }
    }

    fn dispatch(&mut self, message: Message) {
        if let Some(command) = self.state.controller.update(message) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::RunSweep { generation, trials } => {
                self.state.clear_error();
                self.state.progress = Some((0, self.config.group_sizes.len()));
                let sent = self.worker.send(SweepRequest::Run {
                    generation,
                    trials,
                    config: self.config.clone(),
                });
                if !sent {
                    self.state.set_error("Sweep worker is not running");
                }
            }
            Command::Render(plot) => {
                self.state.progress = None;
                self.state.plot = Some(plot);
            }
            Command::ReportError(message) => {
                self.state.progress = None;
                self.state.set_error(message);
            }
        }
    }
}
