use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_done: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub number: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue for bars
    secondary: Color::Rgb(250, 179, 135), // Orange for accents
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161), // Green for sorted / best
    error: Color::Rgb(243, 139, 168),   // Red for highlight / worst
    border_done: Color::Rgb(166, 227, 161),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    number: Color::Rgb(250, 179, 135), // Orange for metric values
};
