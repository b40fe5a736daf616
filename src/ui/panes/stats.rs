//! Run statistics pane

use crate::engine::stats::RunStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render comparisons, swaps and elapsed time
pub fn render_stats_pane(frame: &mut Frame, area: Rect, stats: &RunStats, len: usize) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled("Comparisons  ", label),
            Span::styled(stats.comparisons.to_string(), value.fg(DEFAULT_THEME.compare)),
        ]),
        Line::from(vec![
            Span::styled("Swaps/writes ", label),
            Span::styled(stats.swaps.to_string(), value.fg(DEFAULT_THEME.swap)),
        ]),
        Line::from(vec![
            Span::styled("Elapsed      ", label),
            Span::styled(format!("{:.2}s", stats.elapsed_seconds), value),
        ]),
        Line::from(vec![
            Span::styled("Elements     ", label),
            Span::styled(len.to_string(), value),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
