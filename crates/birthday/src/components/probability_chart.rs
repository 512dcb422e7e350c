//! Line chart of theoretical versus empirical unique-birthday probability.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

use super::{Component, EventResult};
use crate::plot::{PlotModel, SeriesStyle};
use crate::state::AppState;
use crate::util::format::{format_count, format_probability};
use crate::util::styles::{EMPIRICAL_COLOR, HELP_COLOR, THEORETICAL_COLOR, THRESHOLD_COLOR};

pub struct ProbabilityChart;

impl ProbabilityChart {
    pub fn new() -> Self {
        Self
    }

    fn datasets(model: &PlotModel) -> Vec<Dataset<'_>> {
        let mut datasets = Vec::with_capacity(model.series.len() + 1);
        for series in &model.series {
            match series.style {
                SeriesStyle::Line => datasets.push(
                    Dataset::default()
                        .name(series.label)
                        .marker(symbols::Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(THEORETICAL_COLOR))
                        .data(&series.points),
                ),
                SeriesStyle::MarkedLine => {
                    // Unnamed connecting line, then the named markers on top
                    datasets.push(
                        Dataset::default()
                            .marker(symbols::Marker::Braille)
                            .graph_type(GraphType::Line)
                            .style(Style::default().fg(EMPIRICAL_COLOR))
                            .data(&series.points),
                    );
                    datasets.push(
                        Dataset::default()
                            .name(series.label)
                            .marker(symbols::Marker::Dot)
                            .graph_type(GraphType::Scatter)
                            .style(Style::default().fg(EMPIRICAL_COLOR))
                            .data(&series.points),
                    );
                }
                SeriesStyle::Threshold => datasets.push(
                    Dataset::default()
                        .name(series.label)
                        .marker(symbols::Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(THRESHOLD_COLOR))
                        .data(&series.points),
                ),
            }
        }
        datasets
    }

    fn render_model(frame: &mut Frame, area: Rect, model: &PlotModel, block: Block) {
        let [x_min, x_max] = model.x_bounds;
        let [y_min, y_max] = model.y_bounds;

        let x_labels = vec![
            Span::raw(format!("{:.0}", x_min)),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{:.0}", x_max)),
        ];
        let y_labels = vec![
            Span::raw(format_probability(y_min)),
            Span::raw(format_probability((y_min + y_max) / 2.0)),
            Span::raw(format_probability(y_max)),
        ];

        let x_axis = Axis::default()
            .title(model.x_title.dark_gray())
            .bounds([x_min, x_max])
            .labels(x_labels);

        let y_axis = Axis::default()
            .title(model.y_title.dark_gray())
            .bounds([y_min, y_max])
            .labels(y_labels);

        let chart = Chart::new(Self::datasets(model))
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);
    }
}

impl Default for ProbabilityChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProbabilityChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match &state.plot {
            Some(model) => {
                let block = Block::default().borders(Borders::ALL).title(format!(
                    " UNIQUE BIRTHDAY PROBABILITY ({} trials) ",
                    format_count(model.trials)
                ));
                Self::render_model(frame, area, model, block);
            }
            None => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(" UNIQUE BIRTHDAY PROBABILITY ");
                let content = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  Running first sweep...",
                        Style::default().fg(HELP_COLOR),
                    )),
                ];
                frame.render_widget(Paragraph::new(content).block(block), area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthday_core::{SweepConfig, TrialCount, run_sweep};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut chart = ProbabilityChart::new();
        terminal
            .draw(|frame| {
                let area = frame.area();
                chart.render(frame, area, state);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_placeholder_before_first_sweep() {
        let state = AppState::new(TrialCount::new(50).unwrap());
        let text = draw(&state);
        assert!(text.contains("Running first sweep"));
    }

    #[test]
    fn test_renders_title_with_trial_count() {
        let trials = TrialCount::new(1_050).unwrap();
        let result = run_sweep(&SweepConfig::default(), trials).unwrap();
        let mut state = AppState::new(trials);
        state.plot = Some(PlotModel::from_sweep(&result));

        let text = draw(&state);
        assert!(text.contains("UNIQUE BIRTHDAY PROBABILITY (1,050 trials)"));
    }

    #[test]
    fn test_marked_line_adds_connecting_dataset() {
        let result = run_sweep(&SweepConfig::default(), TrialCount::new(50).unwrap()).unwrap();
        let model = PlotModel::from_sweep(&result);
        assert_eq!(ProbabilityChart::datasets(&model).len(), 4);
    }
}
