//! Header line with the current configuration

use crate::ui::settings::Settings;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_header(frame: &mut Frame, area: Rect, settings: &Settings) {
    let bg = DEFAULT_THEME.current_line_bg;
    let label = Style::default().bg(bg).fg(DEFAULT_THEME.comment);
    let value = Style::default().bg(bg).fg(DEFAULT_THEME.fg);

    let mut spans = vec![
        Span::styled(
            " SortStep ",
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  algorithm ", label),
        Span::styled(
            settings.algorithm.name(),
            value.fg(DEFAULT_THEME.secondary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  preset ", label),
        Span::styled(settings.preset.label(), value),
        Span::styled("  view ", label),
        Span::styled(settings.view.id(), value),
        Span::styled("  size ", label),
        Span::styled(settings.size.to_string(), value),
        Span::styled("  delay ", label),
        Span::styled(format!("{}ms", settings.speed_ms), value),
    ];

    if settings.muted {
        spans.push(Span::styled("  🔇 muted", label));
    } else {
        spans.push(Span::styled("  🔊 sound", value));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(bg))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
