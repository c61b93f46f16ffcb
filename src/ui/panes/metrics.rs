//! Single-run metrics pane

use crate::sorts::Metrics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the complexity panel for a single run.
///
/// Counters show as `?` until the run's Done sentinel arrives; the loop
/// count is an approximate time-complexity proxy, the space count is
/// cumulative auxiliary allocation.
pub fn render_metrics_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm_name: &str,
    element_count: usize,
    steps_consumed: u64,
    metrics: Option<Metrics>,
    is_paused: bool,
) {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.number);

    let state = if metrics.is_some() {
        Span::styled("Sorted", Style::default().fg(DEFAULT_THEME.success))
    } else if is_paused {
        Span::styled("Paused", Style::default().fg(DEFAULT_THEME.secondary))
    } else {
        Span::styled("Running", Style::default().fg(DEFAULT_THEME.primary))
    };

    let fmt_counter = |value: Option<u64>| match value {
        Some(v) => Span::styled(v.to_string(), value_style),
        None => Span::styled("?", label_style),
    };

    let lines = vec![
        Line::from(Span::styled(
            algorithm_name,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![Span::styled("State: ", label_style), state]),
        Line::from(vec![
            Span::styled("Elements: ", label_style),
            Span::styled(element_count.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Frames drawn: ", label_style),
            Span::styled(steps_consumed.to_string(), value_style),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Loop count (time): ", label_style),
            fmt_counter(metrics.map(|m| m.loops)),
        ]),
        Line::from(vec![
            Span::styled("Aux space: ", label_style),
            fmt_counter(metrics.map(|m| m.space)),
        ]),
    ];

    let block = Block::default()
        .title(" Complexity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
