// File: crates/ticker-chart-core/src/sample.rs
// Summary: Observed price samples as delivered by a market-data source.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// One observed trade price at a point in time.
///
/// `timestamp` keeps the exchange's UTC offset so the calendar date is the
/// trading day the sample belongs to, not the viewer's local day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<FixedOffset>,
    pub price: f64,
    /// Interval open/high/low when the source provides them. Only used by
    /// diagnostics; the chart itself is drawn from `price` (the close).
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: DateTime<FixedOffset>, price: f64) -> Self {
        Self { timestamp, price, open: None, high: None, low: None }
    }

    pub fn with_range(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Calendar date in the sample's own offset.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Short display label for a trading day, day first: "30 Jan".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// Sort samples by timestamp. Stable, so samples sharing a timestamp keep
/// the order the source delivered them in.
pub fn sort_by_time(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.timestamp);
}
