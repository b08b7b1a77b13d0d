// File: crates/ticker-chart-core/src/layout.rs
// Summary: Layout planning; axis ranges, tick placement, baseline and current-price badge.

use crate::config::ChartStyle;
use crate::error::Warning;
use crate::grid::{decimals_for_step, nice_ticks};
use crate::interpolate::Curve;
use crate::normalize::IndexedSeries;

/// Positions from the right edge at which the price badge is centred.
const BADGE_OFFSET: f64 = 15.0;
/// Badge radius as a fraction of the price range.
const BADGE_RADIUS: f64 = 0.08;

#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
    pub value: f64,
    pub label: String,
    /// False for ticks high enough to collide with the header bar.
    pub visible: bool,
}

/// Current-price indicator drawn near the right edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBadge {
    pub x: f64,
    pub y: f64,
    /// Radius in price units.
    pub radius: f64,
    /// Last price is at or above the previous session's close.
    pub up: bool,
    pub price: f64,
    pub date_label: String,
}

impl PriceBadge {
    pub fn arrow(&self) -> &'static str {
        if self.up { "▲" } else { "▼" }
    }

    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Everything the backend needs to draw one chart.
#[derive(Clone, Debug)]
pub struct Layout {
    pub title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Lowest original price; the area fill runs down to it.
    pub y_baseline: f64,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub y_ticks: Vec<YTick>,
    pub curve: Curve,
    pub badge: Option<PriceBadge>,
    pub warnings: Vec<Warning>,
}

/// Plan the chart for `symbol` from the indexed series and its curve.
///
/// Extents come from the original samples, never the curve, so spline
/// overshoot cannot move the baseline or the axis range.
pub fn layout(symbol: &str, indexed: &IndexedSeries, curve: Curve, style: &ChartStyle) -> Layout {
    let n = indexed.len();
    let (lo, hi) = indexed.price_extrema();
    let span = price_span(lo, hi);
    let pad = span * style.y_padding;
    let y_range = (lo - pad, hi + pad);

    let mut tick_positions = Vec::with_capacity(indexed.sessions.len());
    let mut tick_labels = Vec::with_capacity(indexed.sessions.len());
    for (k, session) in indexed.sessions.iter().enumerate() {
        if let Some((a, b)) = indexed.session_span(k) {
            tick_positions.push((a + b) as f64 / 2.0);
            tick_labels.push(session.label.clone());
        }
    }

    let cutoff = lo + span * style.y_label_cutoff;
    let y_ticks = price_ticks(y_range, style.max_y_ticks, cutoff);

    let badge = price_badge(indexed, y_range, span);

    let mut warnings = curve.warnings.clone();
    if indexed.sessions.len() == 1 {
        let w = Warning::DegenerateLayout { sessions: 1 };
        log::warn!("{w}");
        warnings.push(w);
    }

    Layout {
        title: symbol.to_uppercase(),
        x_range: (-1.0, n as f64),
        y_range,
        y_baseline: lo,
        tick_positions,
        tick_labels,
        y_ticks,
        curve,
        badge,
        warnings,
    }
}

/// Price range used for padding and badge sizing. A flat series gets a
/// small synthetic range so the axis never collapses.
fn price_span(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 {
        span
    } else {
        (lo.abs() * 0.01).max(1.0)
    }
}

fn price_ticks(y_range: (f64, f64), max_ticks: usize, cutoff: f64) -> Vec<YTick> {
    let values = nice_ticks(y_range.0, y_range.1, max_ticks);
    let step = if values.len() >= 2 { values[1] - values[0] } else { y_range.1 - y_range.0 };
    let decimals = decimals_for_step(step);
    values
        .into_iter()
        .map(|value| YTick {
            value,
            label: format!("{value:.decimals$}"),
            visible: value <= cutoff,
        })
        .collect()
}

fn price_badge(indexed: &IndexedSeries, y_range: (f64, f64), span: f64) -> Option<PriceBadge> {
    let previous_close = indexed.previous_session_close()?;
    let price = *indexed.price.last()?;
    let last_session = indexed.sessions.last()?;

    let space_above = y_range.1 - price;
    let space_below = price - y_range.0;
    let y = if space_above > space_below {
        price + space_above * 0.5
    } else {
        price - space_below * 0.5
    };

    let n = indexed.len() as f64;
    let x = (n - BADGE_OFFSET).max((n - 1.0) / 2.0);

    Some(PriceBadge {
        x,
        y,
        radius: span * BADGE_RADIUS,
        up: price >= previous_close,
        price,
        date_label: last_session.label.clone(),
    })
}
