// File: crates/ticker-chart-core/src/source.rs
// Summary: Market-data source seam plus in-memory and CSV-export implementations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::error::ChartError;
use crate::sample::{sort_by_time, Sample};

/// Supplies the recent intraday samples for a symbol, oldest first.
///
/// Only trading periods are expected; closures show up as missing samples.
/// An empty result is not an error here; the normalizer rejects it.
pub trait SampleSource {
    fn fetch(&self, symbol: &str) -> Result<Vec<Sample>, ChartError>;
}

/// Fixed samples keyed by upper-case symbol.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    series: HashMap<String, Vec<Sample>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, samples: Vec<Sample>) -> Self {
        self.series.insert(symbol.to_uppercase(), samples);
        self
    }
}

impl SampleSource for MemorySource {
    fn fetch(&self, symbol: &str) -> Result<Vec<Sample>, ChartError> {
        self.series.get(&symbol.to_uppercase()).cloned().ok_or_else(|| ChartError::Source {
            symbol: symbol.to_uppercase(),
            reason: "symbol not found".to_string(),
        })
    }
}

/// Reads `<dir>/<SYMBOL>.csv` exports with a header row.
#[derive(Clone, Debug)]
pub struct CsvSource {
    pub dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Upper-case file name first, then lower-case.
    fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        [symbol.to_uppercase(), symbol.to_lowercase()]
            .into_iter()
            .map(|s| self.dir.join(format!("{s}.csv")))
            .find(|p| p.exists())
    }
}

impl SampleSource for CsvSource {
    fn fetch(&self, symbol: &str) -> Result<Vec<Sample>, ChartError> {
        let path = self.resolve(symbol).ok_or_else(|| ChartError::Source {
            symbol: symbol.to_uppercase(),
            reason: format!("no CSV export in {}", self.dir.display()),
        })?;
        load_samples_csv(&path)
    }
}

/// Load samples from a CSV file, sorted by timestamp. Errors name the file
/// stem as the symbol.
///
/// Headers are matched case-insensitively. Rows with an unreadable time or
/// a missing close are skipped.
pub fn load_samples_csv(path: &Path) -> Result<Vec<Sample>, ChartError> {
    let symbol = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_default();
    let source_err = |reason: String| ChartError::Source { symbol: symbol.clone(), reason };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| source_err(format!("opening {}: {e}", path.display())))?;

    let headers = rdr
        .headers()
        .map_err(|e| source_err(e.to_string()))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        names.iter().find_map(|want| headers.iter().position(|h| h == want))
    };

    let i_time = idx(&["datetime", "date", "timestamp", "time"])
        .ok_or_else(|| source_err(format!("{}: no time column", path.display())))?;
    let i_close = idx(&["close", "adj_close", "close_price", "c"])
        .ok_or_else(|| source_err(format!("{}: no close column", path.display())))?;
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec.map_err(|e| source_err(e.to_string()))?;
        let num = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };

        let (Some(timestamp), Some(close)) = (rec.get(i_time).and_then(parse_timestamp), num(Some(i_close))) else {
            skipped += 1;
            continue;
        };
        let mut sample = Sample::new(timestamp, close);
        if let (Some(o), Some(h), Some(l)) = (num(i_open), num(i_high), num(i_low)) {
            sample = sample.with_range(o, h, l);
        }
        out.push(sample);
    }

    if skipped > 0 {
        log::warn!("{}: skipped {} unreadable row(s)", path.display(), skipped);
    }
    sort_by_time(&mut out);
    log::debug!("{}: loaded {} samples", path.display(), out.len());
    Ok(out)
}

/// Parse RFC 3339, `YYYY-MM-DD HH:MM:SS±HH:MM`, naive `YYYY-MM-DD HH:MM:SS`
/// (UTC) or integer epoch seconds/milliseconds (UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(t) = DateTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t.and_utc().fixed_offset());
        }
    }
    if let Ok(n) = s.parse::<i64>() {
        let utc = if n > 10_i64.pow(12) {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        };
        return utc.map(|t| t.fixed_offset());
    }
    None
}
