//! Algorithm description pane

use crate::algorithms::AlgorithmId;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: AlgorithmId) {
    let block = Block::default()
        .title(format!(" {} ", algorithm.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let stability = if algorithm.is_stable() {
        "stable"
    } else {
        "unstable"
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                algorithm.complexity(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", stability),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            algorithm.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
