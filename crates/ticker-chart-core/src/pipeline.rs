// File: crates/ticker-chart-core/src/pipeline.rs
// Summary: Single-symbol and batch runs of normalize -> interpolate -> layout -> render.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::chart::{render_to_png, render_to_png_bytes};
use crate::config::ChartConfig;
use crate::error::{ChartError, Warning};
use crate::interpolate::interpolate;
use crate::layout::{layout, Layout};
use crate::normalize::normalize;
use crate::sample::Sample;
use crate::source::SampleSource;

/// Trading sessions the fetch window is meant to cover.
pub const EXPECTED_SESSIONS: usize = 5;

/// A planned chart ready to be rasterized.
#[derive(Clone, Debug)]
pub struct GeneratedChart {
    pub symbol: String,
    pub layout: Layout,
    pub samples: usize,
    pub sessions: usize,
}

impl GeneratedChart {
    pub fn warnings(&self) -> &[Warning] {
        &self.layout.warnings
    }

    pub fn to_png_bytes(&self, config: &ChartConfig) -> Result<Vec<u8>, ChartError> {
        render_to_png_bytes(&self.layout, &config.style)
    }

    pub fn write_png(&self, config: &ChartConfig, path: impl AsRef<Path>) -> Result<(), ChartError> {
        render_to_png(&self.layout, &config.style, path)
    }
}

/// Run the three stages for one symbol. Fails before any interpolation
/// work when there are no samples.
pub fn generate_chart(symbol: &str, samples: &[Sample], config: &ChartConfig) -> Result<GeneratedChart, ChartError> {
    config.validate()?;
    let indexed = normalize(samples)?;
    let curve = interpolate(&indexed, &config.interpolation);
    let layout = layout(symbol, &indexed, curve, &config.style);
    Ok(GeneratedChart {
        symbol: symbol.to_uppercase(),
        samples: indexed.len(),
        sessions: indexed.sessions.len(),
        layout,
    })
}

/// Output file name `<YYYY-MM-DD_HH-MM>_<SYMBOL>.png`.
pub fn chart_file_name<Tz: TimeZone>(symbol: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.png", now.format("%Y-%m-%d_%H-%M"), symbol.to_uppercase())
}

/// Fetch, plan and write the chart for `symbol` into `out_dir`.
pub fn generate_to_dir<S, Tz>(
    source: &S,
    symbol: &str,
    config: &ChartConfig,
    out_dir: &Path,
    now: &DateTime<Tz>,
) -> Result<PathBuf, ChartError>
where
    S: SampleSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let samples = source.fetch(symbol)?;
    let chart = generate_chart(symbol, &samples, config)?;
    if chart.sessions < EXPECTED_SESSIONS {
        log::warn!(
            "{}: only {} trading day(s) available (requested {})",
            chart.symbol, chart.sessions, EXPECTED_SESSIONS
        );
    }
    log::debug!("{}: {} points across {} trading day(s)", chart.symbol, chart.samples, chart.sessions);

    let path = out_dir.join(chart_file_name(symbol, now));
    chart.write_png(config, &path)?;
    Ok(path)
}

/// Outcome of a batch run; one entry per requested symbol.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<(String, PathBuf)>,
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate a chart per symbol. Each run is independent; a failure is
/// recorded and the batch moves on.
pub fn run_batch<S, Tz>(
    source: &S,
    symbols: &[String],
    config: &ChartConfig,
    out_dir: &Path,
    now: &DateTime<Tz>,
) -> BatchSummary
where
    S: SampleSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut summary = BatchSummary::default();
    for (i, symbol) in symbols.iter().enumerate() {
        let symbol = symbol.trim().to_uppercase();
        log::info!("[{}/{}] processing {}", i + 1, symbols.len(), symbol);
        match generate_to_dir(source, &symbol, config, out_dir, now) {
            Ok(path) => summary.succeeded.push((symbol, path)),
            Err(e) => {
                log::error!("{symbol}: {e}");
                summary.failed.push((symbol, e.to_string()));
            }
        }
    }
    summary
}
