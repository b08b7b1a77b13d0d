// File: crates/ticker-chart-core/src/geometry.rs
// Summary: Pixel rectangles for the figure regions derived from the style.

use crate::config::ChartStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }
}

/// Axes area in pixels. Margins are measured from the bottom-left, pixels
/// from the top-left.
pub fn plot_rect(style: &ChartStyle) -> RectF {
    let (w, h) = style.pixel_size();
    let (w, h) = (w as f32, h as f32);
    let m = &style.margins;
    RectF::from_ltrb(w * m.left, h * (1.0 - m.top), w * m.right, h * (1.0 - m.bottom))
}

/// Full-width header bar across the top of the figure.
pub fn header_rect(style: &ChartStyle) -> RectF {
    let (w, h) = style.pixel_size();
    RectF::from_ltrb(0.0, 0.0, w as f32, h as f32 * style.header_height)
}
