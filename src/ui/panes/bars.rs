//! Bar-chart pane: one bar per element, one highlighted index

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Render an array as a bar chart.
///
/// The bar at `highlight` (the most recently mutated index) is drawn red;
/// once `done` is set every bar turns green and the border follows. When
/// there are more elements than columns, the prefix that fits is drawn.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[i64],
    highlight: Option<usize>,
    done: bool,
) {
    let border_style = if done {
        Style::default()
            .fg(DEFAULT_THEME.border_done)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if values.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let visible = &values[..values.len().min(inner_width)];

    // Shift so the smallest value still gets a visible bar; negative
    // file-supplied values render fine this way
    let min = visible.iter().copied().min().unwrap_or(0);

    let bars: Vec<Bar> = visible
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let color = if done {
                DEFAULT_THEME.success
            } else if Some(i) == highlight {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.primary
            };
            Bar::default()
                .value((v - min + 1) as u64)
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let bar_width = ((inner_width / visible.len()).max(1)) as u16;

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
