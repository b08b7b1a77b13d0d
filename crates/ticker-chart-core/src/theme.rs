// File: crates/ticker-chart-core/src/theme.rs
// Summary: Color palettes for print and screen chart rendering.

use skia_safe as skia;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub line_stroke: skia::Color,
    /// Area under the curve; alpha comes from `ChartStyle::fill_opacity`.
    pub area_fill: skia::Color,
    pub header: skia::Color,
    pub header_shadow: skia::Color,
    pub header_text: skia::Color,
    pub badge_up: skia::Color,
    pub badge_down: skia::Color,
    pub badge_outline: skia::Color,
    pub badge_text: skia::Color,
    pub badge_accent: skia::Color,
}

impl Theme {
    /// Newspaper print palette: red line, pale blue grid, blue header bar,
    /// transparent background.
    pub fn print() -> Self {
        Self {
            name: "print",
            background: skia::Color::TRANSPARENT,
            grid: skia::Color::from_argb(102, 0xAD, 0xD8, 0xE6), // 40% light blue
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0xFF, 0x00, 0x00),
            area_fill: skia::Color::from_argb(255, 0xFF, 0x00, 0x00),
            header: skia::Color::from_argb(255, 0x2d, 0x68, 0xb6),
            header_shadow: skia::Color::from_argb(38, 0, 0, 0), // 15% black
            header_text: skia::Color::WHITE,
            badge_up: skia::Color::from_argb(255, 0x00, 0xCC, 0x00),
            badge_down: skia::Color::from_argb(255, 0xFF, 0x8C, 0x00),
            badge_outline: skia::Color::WHITE,
            badge_text: skia::Color::WHITE,
            badge_accent: skia::Color::from_argb(255, 0xFF, 0xFF, 0x00),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            area_fill: skia::Color::from_argb(255, 32, 120, 200),
            header: skia::Color::from_argb(255, 40, 40, 50),
            header_shadow: skia::Color::from_argb(38, 0, 0, 0),
            header_text: skia::Color::WHITE,
            badge_up: skia::Color::from_argb(255, 20, 160, 90),
            badge_down: skia::Color::from_argb(255, 200, 60, 60),
            badge_outline: skia::Color::WHITE,
            badge_text: skia::Color::WHITE,
            badge_accent: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            area_fill: skia::Color::from_argb(255, 64, 160, 255),
            header: skia::Color::from_argb(255, 0x2d, 0x68, 0xb6),
            header_shadow: skia::Color::from_argb(64, 0, 0, 0),
            header_text: skia::Color::WHITE,
            badge_up: skia::Color::from_argb(255, 40, 200, 120),
            badge_down: skia::Color::from_argb(255, 220, 80, 80),
            badge_outline: skia::Color::from_argb(255, 18, 18, 20),
            badge_text: skia::Color::WHITE,
            badge_accent: skia::Color::from_argb(255, 255, 230, 70),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::print(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme, ChartError> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::UnknownTheme(name.to_string()))
}
