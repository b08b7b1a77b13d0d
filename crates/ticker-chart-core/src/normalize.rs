// File: crates/ticker-chart-core/src/normalize.rs
// Summary: Series normalizer; replaces timestamps with a dense index and records session boundaries.

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::sample::{date_label, Sample};

/// First position of a calendar day's run of samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionBoundary {
    pub position: usize,
    pub date: NaiveDate,
    pub label: String,
}

/// Gap-free view of a series: sample `i` sits at position `i` whatever the
/// wall-clock distance to its neighbours, so overnight and weekend closures
/// take no horizontal space.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedSeries {
    pub position: Vec<usize>,
    pub price: Vec<f64>,
    /// Strictly increasing in `position`; the first entry is at 0.
    pub sessions: Vec<SessionBoundary>,
}

impl IndexedSeries {
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn last_position(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Inclusive position span `[start, end]` of session `k`.
    ///
    /// A session ends on the sample just before the next boundary; the last
    /// session ends on the final sample.
    pub fn session_span(&self, k: usize) -> Option<(usize, usize)> {
        let start = self.sessions.get(k)?.position;
        let end = match self.sessions.get(k + 1) {
            Some(next) => next.position - 1,
            None => self.last_position(),
        };
        Some((start, end))
    }

    /// Prices as `(position, price)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.position.iter().zip(&self.price).map(|(&x, &y)| (x as f64, y)).collect()
    }

    /// `(min, max)` over the original prices.
    pub fn price_extrema(&self) -> (f64, f64) {
        self.price.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        })
    }

    /// Last price of the session before the final one, if there is one.
    pub fn previous_session_close(&self) -> Option<f64> {
        if self.sessions.len() < 2 {
            return None;
        }
        let last_start = self.sessions[self.sessions.len() - 1].position;
        self.price.get(last_start.checked_sub(1)?).copied()
    }
}

/// Assign dense positions and detect calendar-day sessions.
///
/// Samples are expected in timestamp order; ties are fine. A new session
/// starts whenever a sample's calendar date differs from its predecessor's,
/// so the first sample always opens one.
pub fn normalize(series: &[Sample]) -> Result<IndexedSeries, ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let n = series.len();
    let mut position = Vec::with_capacity(n);
    let mut price = Vec::with_capacity(n);
    let mut sessions: Vec<SessionBoundary> = Vec::new();
    let mut current: Option<NaiveDate> = None;

    for (i, sample) in series.iter().enumerate() {
        position.push(i);
        price.push(sample.price);

        let date = sample.date();
        if current != Some(date) {
            sessions.push(SessionBoundary { position: i, date, label: date_label(date) });
            current = Some(date);
        }
    }

    log::debug!("normalized {} samples into {} session(s)", n, sessions.len());
    Ok(IndexedSeries { position, price, sessions })
}
