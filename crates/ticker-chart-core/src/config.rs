// File: crates/ticker-chart-core/src/config.rs
// Summary: Immutable pipeline and styling configuration, loadable from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::ChartError;
use crate::theme::{self, Theme};

/// Interpolation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpolationOptions {
    /// Curve points per original sample.
    pub density: usize,
    /// Fit one spline through every session (smooth across closures) instead
    /// of one spline per session joined by straight segments.
    pub interpolate_across_sessions: bool,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self { density: 5, interpolate_across_sessions: true }
    }
}

/// Plot area as fractions of the figure, measured from the bottom-left like
/// a print layout: `left`/`right` from the left edge, `bottom`/`top` from the
/// bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self { left: 0.08, right: 0.95, top: 0.90, bottom: 0.12 }
    }
}

/// Physical size and typography of the rendered figure. Sizes in points are
/// converted to pixels with `dpi`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    pub theme: String,
    pub width_mm: f32,
    pub height_mm: f32,
    pub dpi: f32,
    pub margins: Margins,
    /// Header bar height as a fraction of figure height.
    pub header_height: f32,
    /// Header corner radius as a fraction of figure width.
    pub header_radius: f32,
    /// Header shadow offset as a fraction of figure width.
    pub header_shadow_offset: f32,
    pub line_width_pt: f32,
    pub spine_width_pt: f32,
    pub grid_width_pt: f32,
    pub x_label_size_pt: f32,
    pub y_label_size_pt: f32,
    pub title_size_pt: f32,
    pub fill_opacity: f32,
    /// Price axis padding above and below the data, as a fraction of the price range.
    pub y_padding: f64,
    /// Price labels above `min + cutoff * range` are hidden so they clear the header.
    pub y_label_cutoff: f64,
    pub max_y_ticks: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            theme: "print".to_string(),
            width_mm: 105.6,
            height_mm: 44.45,
            dpi: 300.0,
            margins: Margins::default(),
            header_height: 0.08,
            header_radius: 0.01,
            header_shadow_offset: 0.002,
            line_width_pt: 2.0,
            spine_width_pt: 1.5,
            grid_width_pt: 0.5,
            x_label_size_pt: 9.0,
            y_label_size_pt: 10.0,
            title_size_pt: 8.0,
            fill_opacity: 0.15,
            y_padding: 0.10,
            y_label_cutoff: 0.85,
            max_y_ticks: 6,
        }
    }
}

impl ChartStyle {
    /// Figure size in whole pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let px = |mm: f32| (mm / 25.4 * self.dpi).round() as i32;
        (px(self.width_mm), px(self.height_mm))
    }

    /// Convert a length in points to pixels.
    pub fn pt(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }

    pub fn resolve_theme(&self) -> Result<Theme, ChartError> {
        theme::find(&self.theme)
    }

    fn validate(&self) -> Result<(), ChartError> {
        if !(self.width_mm > 0.0 && self.height_mm > 0.0 && self.dpi > 0.0) {
            return Err(ChartError::Config("figure size and dpi must be positive".into()));
        }
        let m = &self.margins;
        let ordered = 0.0 <= m.left && m.left < m.right && m.right <= 1.0
            && 0.0 <= m.bottom && m.bottom < m.top && m.top <= 1.0;
        if !ordered {
            return Err(ChartError::Config(format!("margins out of order: {m:?}")));
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ChartError::Config("fill_opacity must be within 0..=1".into()));
        }
        if !(self.y_padding >= 0.0 && (0.0..=1.0).contains(&self.y_label_cutoff)) {
            return Err(ChartError::Config("y_padding must be >= 0 and y_label_cutoff within 0..=1".into()));
        }
        if self.max_y_ticks < 2 {
            return Err(ChartError::Config("max_y_ticks must be at least 2".into()));
        }
        self.resolve_theme().map(|_| ())
    }
}

/// Everything one pipeline run needs, passed explicitly.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub interpolation: InterpolationOptions,
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let config: ChartConfig =
            toml::from_str(text).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.interpolation.density == 0 {
            return Err(ChartError::Config("density must be at least 1".into()));
        }
        self.style.validate()
    }
}
