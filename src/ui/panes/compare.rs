//! Compare-mode results pane
//!
//! While runs are in flight this shows per-algorithm progress; once all
//! seven report in, it becomes the complexity comparison table with the
//! best loop count in green and the worst in red.

use crate::sorts::{Algorithm, Metrics};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// One row of the comparison table.
pub struct CompareRow {
    pub algorithm: Algorithm,
    pub metrics: Option<Metrics>,
    pub steps_consumed: u64,
}

pub fn render_compare_pane(frame: &mut Frame, area: Rect, rows: &[CompareRow]) {
    let all_done = rows.iter().all(|r| r.metrics.is_some());

    let block = Block::default()
        .title(if all_done {
            " Complexity Comparison "
        } else {
            " Progress "
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if all_done {
            DEFAULT_THEME.border_done
        } else {
            DEFAULT_THEME.border_normal
        }))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    // Extremes across finished runs only
    let finished: Vec<u64> = rows.iter().filter_map(|r| r.metrics.map(|m| m.loops)).collect();
    let min_loops = finished.iter().copied().min();
    let max_loops = finished.iter().copied().max();

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let name = format!("{:<26}", row.algorithm.name());
            match row.metrics {
                Some(metrics) => {
                    let loops_style = if all_done && Some(metrics.loops) == min_loops {
                        Style::default()
                            .fg(DEFAULT_THEME.success)
                            .add_modifier(Modifier::BOLD)
                    } else if all_done && Some(metrics.loops) == max_loops {
                        Style::default()
                            .fg(DEFAULT_THEME.error)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.number)
                    };
                    Line::from(vec![
                        Span::styled(name, Style::default().fg(DEFAULT_THEME.fg)),
                        Span::styled(format!("{:>9}", metrics.loops), loops_style),
                        Span::styled(" loops  ", label_style),
                        Span::styled(
                            format!("{:>7}", metrics.space),
                            Style::default().fg(DEFAULT_THEME.number),
                        ),
                        Span::styled(" aux", label_style),
                    ])
                }
                None => Line::from(vec![
                    Span::styled(name, Style::default().fg(DEFAULT_THEME.fg)),
                    Span::styled(
                        format!("{:>9} frames…", row.steps_consumed),
                        label_style,
                    ),
                ]),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
