//! Buffer visualization pane
//!
//! Draws the buffer on a ratatui canvas in one of three [`View`]s:
//!
//! - **Bars**: one vertical bar per element
//! - **Dots**: one point per element at its value
//! - **Radial**: one spoke per element around the centre, length = value
//!
//! Colour encodes the element's [`Highlight`]; unhighlighted elements take a
//! hue from their value.

use crate::ui::settings::View;
use crate::ui::theme::{value_color, DEFAULT_THEME};
use crate::ui::view::{BufferView, Highlight};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::TAU;

/// Render the visualization pane
pub fn render_visual_pane(frame: &mut Frame, area: Rect, view: &BufferView, mode: View) {
    let block = Block::default()
        .title(format!(" Buffer · {} ", mode))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(empty buffer)")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let n = view.values.len() as f64;
    let max = view.max_value().max(1.0);

    match mode {
        View::Bars => frame.render_widget(
            Canvas::default()
                .block(block)
                .marker(Marker::HalfBlock)
                .x_bounds([0.0, n])
                .y_bounds([0.0, max])
                .paint(|ctx| paint_bars(ctx, view, max)),
            area,
        ),
        View::Dots => frame.render_widget(
            Canvas::default()
                .block(block)
                .marker(Marker::Braille)
                .x_bounds([0.0, n])
                .y_bounds([0.0, max])
                .paint(|ctx| paint_dots(ctx, view, max)),
            area,
        ),
        View::Radial => frame.render_widget(
            Canvas::default()
                .block(block)
                .marker(Marker::Braille)
                .x_bounds([-max, max])
                .y_bounds([-max, max])
                .paint(|ctx| paint_spokes(ctx, view, max)),
            area,
        ),
    }
}

fn color_at(view: &BufferView, index: usize, max: f64) -> Color {
    match view.highlight(index) {
        Highlight::Sorted => DEFAULT_THEME.sorted,
        Highlight::Swap => DEFAULT_THEME.swap,
        Highlight::Compare => DEFAULT_THEME.compare,
        Highlight::None => value_color(view.values[index], max),
    }
}

fn paint_bars(ctx: &mut Context<'_>, view: &BufferView, max: f64) {
    for (i, &value) in view.values.iter().enumerate() {
        let x = i as f64 + 0.5;
        ctx.draw(&CanvasLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: value,
            color: color_at(view, i, max),
        });
    }
}

fn paint_dots(ctx: &mut Context<'_>, view: &BufferView, max: f64) {
    for (i, &value) in view.values.iter().enumerate() {
        ctx.draw(&Points {
            coords: &[(i as f64 + 0.5, value)],
            color: color_at(view, i, max),
        });
    }
}

fn paint_spokes(ctx: &mut Context<'_>, view: &BufferView, max: f64) {
    let n = view.values.len() as f64;
    for (i, &value) in view.values.iter().enumerate() {
        // Start at twelve o'clock and go clockwise
        let angle = TAU * i as f64 / n - TAU / 4.0;
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: 0.0,
            x2: value * angle.cos(),
            y2: -value * angle.sin(),
            color: color_at(view, i, max),
        });
    }
}
