// File: crates/ticker-chart-core/src/lib.rs
// Summary: Core library entry point; exports the intraday chart pipeline and rendering API.

pub mod sample;
pub mod normalize;
pub mod spline;
pub mod interpolate;
pub mod layout;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod theme;
pub mod text;
pub mod source;
pub mod report;
pub mod pipeline;

pub use sample::Sample;
pub use normalize::{normalize, IndexedSeries, SessionBoundary};
pub use interpolate::{interpolate, Curve, MIN_SPLINE_SAMPLES};
pub use layout::{layout, Layout, PriceBadge, YTick};
pub use chart::{render_to_png, render_to_png_bytes, render_to_rgba8};
pub use config::{ChartConfig, ChartStyle, InterpolationOptions};
pub use error::{ChartError, Warning};
pub use theme::Theme;
pub use source::{CsvSource, MemorySource, SampleSource};
pub use report::SeriesReport;
pub use pipeline::{chart_file_name, generate_chart, generate_to_dir, run_batch, BatchSummary, GeneratedChart};
