// File: crates/ticker-chart-core/src/report.rs
// Summary: Data-quality summary of a fetched series (days, gaps, sampling intervals, prices).

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

use crate::error::ChartError;
use crate::sample::Sample;

/// A pause between consecutive samples longer than the report threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Gap {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
    pub hours: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceStats {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl PriceStats {
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesReport {
    pub samples: usize,
    pub first: DateTime<FixedOffset>,
    pub last: DateTime<FixedOffset>,
    /// Samples per calendar day, in first-occurrence order.
    pub per_day: Vec<(NaiveDate, usize)>,
    pub gaps: Vec<Gap>,
    /// Most frequent spacings as `(minutes, count)`, most common first.
    pub intervals: Vec<(i64, usize)>,
    pub prices: PriceStats,
}

impl SeriesReport {
    /// Report with the default gap threshold of one hour.
    pub fn from_samples(samples: &[Sample]) -> Result<Self, ChartError> {
        Self::with_gap_threshold(samples, Duration::hours(1))
    }

    pub fn with_gap_threshold(samples: &[Sample], threshold: Duration) -> Result<Self, ChartError> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(ChartError::EmptyInput),
        };

        let mut per_day: Vec<(NaiveDate, usize)> = Vec::new();
        for s in samples {
            let date = s.date();
            match per_day.iter_mut().find(|(d, _)| *d == date) {
                Some((_, count)) => *count += 1,
                None => per_day.push((date, 1)),
            }
        }

        let mut gaps = Vec::new();
        let mut spacing: BTreeMap<i64, usize> = BTreeMap::new();
        for pair in samples.windows(2) {
            let delta = pair[1].timestamp - pair[0].timestamp;
            if delta > threshold {
                gaps.push(Gap {
                    from: pair[0].timestamp,
                    to: pair[1].timestamp,
                    hours: delta.num_seconds() as f64 / 3600.0,
                });
            }
            *spacing.entry(delta.num_minutes()).or_default() += 1;
        }
        let mut intervals: Vec<(i64, usize)> = spacing.into_iter().collect();
        // BTreeMap order makes the shorter interval win ties after this stable sort.
        intervals.sort_by(|a, b| b.1.cmp(&a.1));
        intervals.truncate(5);

        let closes = samples.iter().map(|s| s.price);
        let close_low = closes.clone().fold(f64::INFINITY, f64::min);
        let close_high = closes.fold(f64::NEG_INFINITY, f64::max);
        let high = samples.iter().filter_map(|s| s.high).fold(close_high, f64::max);
        let low = samples.iter().filter_map(|s| s.low).fold(close_low, f64::min);
        let prices = PriceStats {
            open: first.open.unwrap_or(first.price),
            close: last.price,
            high,
            low,
        };

        Ok(Self {
            samples: samples.len(),
            first: first.timestamp,
            last: last.timestamp,
            per_day,
            gaps,
            intervals,
            prices,
        })
    }

    pub fn trading_days(&self) -> usize {
        self.per_day.len()
    }
}

impl fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total data points: {}", self.samples)?;
        writeln!(f, "Trading days covered: {}", self.trading_days())?;
        writeln!(f, "First data point: {}", self.first)?;
        writeln!(f, "Last data point: {}", self.last)?;

        writeln!(f, "\nData points per day:")?;
        for (date, count) in &self.per_day {
            writeln!(f, "  {date}: {count} points")?;
        }

        writeln!(f, "\nLarge gaps: {}", self.gaps.len())?;
        for gap in self.gaps.iter().take(10) {
            writeln!(f, "  {} -> {} (Gap: {:.1} hours)", gap.from, gap.to, gap.hours)?;
        }

        writeln!(f, "\nInterval distribution:")?;
        for (minutes, count) in &self.intervals {
            writeln!(f, "  {minutes} minutes: {count} occurrences")?;
        }

        let p = &self.prices;
        writeln!(f, "\nPrice statistics:")?;
        writeln!(f, "  Open: {:.2}", p.open)?;
        writeln!(f, "  Close: {:.2}", p.close)?;
        writeln!(f, "  High: {:.2}", p.high)?;
        writeln!(f, "  Low: {:.2}", p.low)?;
        write!(f, "  Range: {:.2}", p.range())
    }
}
