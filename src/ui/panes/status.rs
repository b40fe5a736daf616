//! Status bar rendering with keybindings and state indicators

use crate::audio::Tone;
use crate::ui::app::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `tone` is the last note the voice sounded, if any.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    phase: Phase,
    tone: Option<Tone>,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let badge_bg = match phase {
        Phase::Ready => DEFAULT_THEME.primary,
        Phase::Sorting => DEFAULT_THEME.compare,
        Phase::Sorted => DEFAULT_THEME.sorted,
        Phase::Cancelled => DEFAULT_THEME.error,
    };

    let mut left_spans = vec![
        Span::styled(
            format!(" {} ", phase.label()),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    if let (Phase::Sorting, Some(tone)) = (phase, tone) {
        left_spans.push(Span::styled(
            format!(" ♪ {:.0} Hz ", tone.frequency_hz),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.secondary),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings = [
        (" ⎵ ", " sort "),
        (" c ", " cancel "),
        (" r ", " reset "),
        (" a ", " algo "),
        (" p ", " preset "),
        (" v ", " view "),
        (" +/- ", " speed "),
        (" [/] ", " size "),
        (" m ", " mute "),
        ("q", " quit "),
    ];

    let mut right_spans = Vec::with_capacity(bindings.len() * 4);
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
