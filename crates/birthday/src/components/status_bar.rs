use super::{Component, EventResult};
use crate::controller::ControllerState;
use crate::plot::THRESHOLD;
use crate::state::AppState;
use crate::util::format::{format_count, format_percentage};
use crate::util::styles::{ERROR_COLOR, HELP_COLOR, PENDING_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str = "←/→ h/l: adjust trials | Home/End: min/max | Enter: apply | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn status_span(state: &AppState) -> Span<'static> {
        match state.controller.state() {
            ControllerState::Recomputing { trials, .. } => {
                let progress = state
                    .progress
                    .map(|(current, total)| format!(" {current}/{total}"))
                    .unwrap_or_default();
                Span::styled(
                    format!("Recomputing{progress} ({} trials)", format_count(trials.get())),
                    Style::default().fg(PENDING_COLOR),
                )
            }
            ControllerState::Idle => {
                let text = match state.plot.as_ref().and_then(|plot| plot.crossing) {
                    Some(n) => format!(
                        "Below {} from {n} people",
                        format_percentage(THRESHOLD)
                    ),
                    None => "Idle".to_string(),
                };
                Span::styled(text, Style::default().fg(HELP_COLOR))
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status = if let Some(error) = &state.error_message {
            vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.clone()),
            ]
        } else {
            vec![Self::status_span(state)]
        };

        let mut spans = status;
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR)));

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
