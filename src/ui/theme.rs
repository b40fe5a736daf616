use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Indigo
    pub secondary: Color, // Cyan
    pub comment: Color,   // Grey
    pub compare: Color,   // Amber
    pub swap: Color,      // Rose
    pub sorted: Color,    // Emerald
    pub error: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(99, 102, 241),
    secondary: Color::Rgb(34, 211, 238),
    comment: Color::Rgb(108, 112, 134),
    compare: Color::Rgb(251, 191, 36),
    swap: Color::Rgb(244, 63, 94),
    sorted: Color::Rgb(16, 185, 129),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
};

/// Resting colour of a value: a hue sweep from red (0) to violet (max)
pub fn value_color(value: f64, max: f64) -> Color {
    let position = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    hsl_to_rgb(position * 280.0, 0.75, 0.60)
}

/// Convert HSL (hue in degrees, saturation and lightness in `[0, 1]`)
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue.rem_euclid(360.0)) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
