// File: crates/ticker-chart-core/src/interpolate.rs
// Summary: Curve interpolator; densifies the indexed series with a natural cubic spline.

use crate::config::InterpolationOptions;
use crate::error::Warning;
use crate::grid::linspace;
use crate::normalize::IndexedSeries;
use crate::spline::NaturalCubicSpline;

/// Fewest samples a spline is fitted through. Below this the raw points are used.
pub const MIN_SPLINE_SAMPLES: usize = 4;

/// How a stretch of the curve was produced.
#[derive(Clone, Debug)]
pub enum Segment {
    Spline(NaturalCubicSpline),
    /// Raw samples joined by straight lines.
    Raw(Vec<(f64, f64)>),
}

impl Segment {
    fn domain(&self) -> (f64, f64) {
        match self {
            Segment::Spline(s) => s.domain(),
            Segment::Raw(pts) => (pts[0].0, pts[pts.len() - 1].0),
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            Segment::Spline(s) => s.eval(x),
            Segment::Raw(pts) => eval_polyline(pts, x),
        }
    }
}

/// Dense `(position, price)` points plus the model they were sampled from.
#[derive(Clone, Debug)]
pub struct Curve {
    pub points: Vec<(f64, f64)>,
    segments: Vec<Segment>,
    pub warnings: Vec<Warning>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when no spline was fitted anywhere and `points` are the samples.
    pub fn is_passthrough(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Raw(_)))
    }

    /// Value of the fitted curve at position `x`.
    ///
    /// Passes through every original sample exactly. Between sessions fitted
    /// separately the curve is the straight join of the neighbouring samples.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let last = self.segments.len().checked_sub(1)?;
        for (k, seg) in self.segments.iter().enumerate() {
            let (_, hi) = seg.domain();
            if x <= hi || k == last {
                return Some(seg.eval(x));
            }
            let next = &self.segments[k + 1];
            let (lo, _) = next.domain();
            if x < lo {
                let (y0, y1) = (seg.eval(hi), next.eval(lo));
                return Some(y0 + (y1 - y0) * (x - hi) / (lo - hi));
            }
        }
        None
    }

    /// `(min, max)` over the dense points.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        }))
    }
}

/// Interpolate the indexed series into a dense smooth curve.
///
/// With `interpolate_across_sessions` one spline runs through every sample,
/// bridging closures with a smooth transition. Otherwise each session gets
/// its own spline and sessions are joined by straight segments. A run with
/// fewer than [`MIN_SPLINE_SAMPLES`] samples is passed through unchanged and
/// raises one `InsufficientData` warning counting every raw sample.
pub fn interpolate(indexed: &IndexedSeries, opts: &InterpolationOptions) -> Curve {
    let points = indexed.points();
    let density = opts.density.max(1);

    let runs: Vec<&[(f64, f64)]> = if opts.interpolate_across_sessions {
        vec![&points[..]]
    } else {
        (0..indexed.sessions.len())
            .filter_map(|k| indexed.session_span(k))
            .map(|(a, b)| &points[a..=b])
            .collect()
    };

    let mut warnings = Vec::new();
    let mut raw_samples = 0usize;
    let mut segments = Vec::with_capacity(runs.len());
    let mut dense = Vec::with_capacity(points.len() * density);

    for run in runs.into_iter().filter(|r| !r.is_empty()) {
        match fit_run(run) {
            Some(spline) => {
                let (lo, hi) = spline.domain();
                dense.extend(spline.eval_many(&linspace(lo, hi, run.len() * density)));
                segments.push(Segment::Spline(spline));
            }
            None => {
                raw_samples += run.len();
                dense.extend_from_slice(run);
                segments.push(Segment::Raw(run.to_vec()));
            }
        }
    }

    // Any run drawn unsmoothed is reported, including short sessions fitted on their own.
    if raw_samples > 0 {
        let w = Warning::InsufficientData { samples: raw_samples };
        log::warn!("{w}");
        warnings.push(w);
    }

    log::debug!("interpolated {} samples into {} curve points", points.len(), dense.len());
    Curve { points: dense, segments, warnings }
}

fn fit_run(run: &[(f64, f64)]) -> Option<NaturalCubicSpline> {
    if run.len() < MIN_SPLINE_SAMPLES {
        return None;
    }
    let xs: Vec<f64> = run.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = run.iter().map(|p| p.1).collect();
    NaturalCubicSpline::fit(&xs, &ys)
}

fn eval_polyline(pts: &[(f64, f64)], x: f64) -> f64 {
    if pts.len() == 1 {
        return pts[0].1;
    }
    let upper = pts.partition_point(|p| p.0 <= x);
    if upper > 0 && pts[upper - 1].0 == x {
        return pts[upper - 1].1;
    }
    let i = upper.clamp(1, pts.len() - 1) - 1;
    let (x0, y0) = pts[i];
    let (x1, y1) = pts[i + 1];
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
