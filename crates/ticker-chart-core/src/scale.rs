// File: crates/ticker-chart-core/src/scale.rs
// Summary: Linear position (X) and price (Y) transforms from data space to pixels.

use crate::geometry::RectF;

/// Logical X coordinate (dense sample position).
pub type Logical = f64;
/// Value Y coordinate (price).
pub type Value = f64;

/// Horizontal scale mapping `[min, max]` positions onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct PositionScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: Logical,
    pub max: Logical,
}

impl PositionScale {
    pub fn new(left_px: f32, right_px: f32, min: Logical, max: Logical) -> Self {
        let max = if (max - min).abs() < 1e-12 { min + 1.0 } else { max };
        Self { left_px, right_px, min, max }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.min) / (self.max - self.min)) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    /// Pixel length of `dv` price units.
    pub fn len_px(&self, dv: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        (dv / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Both transforms for one plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: PositionScale,
    pub y: ValueScale,
}

impl PlotScales {
    pub fn new(rect: RectF, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x: PositionScale::new(rect.left, rect.right, x_range.0, x_range.1),
            y: ValueScale::new_linear(rect.top, rect.bottom, y_range.0, y_range.1),
        }
    }

    #[inline]
    pub fn point(&self, x: Logical, y: Value) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
