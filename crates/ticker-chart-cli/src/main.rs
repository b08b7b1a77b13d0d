// File: crates/ticker-chart-cli/src/main.rs
// Summary: CLI that renders 5-day intraday charts from CSV exports and diagnoses fetched series.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ticker_chart_core::{run_batch, ChartConfig, CsvSource, SampleSource, SeriesReport};

#[derive(Parser, Debug)]
#[command(name = "ticker-chart", version, about = "Render print-ready intraday stock charts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one chart per symbol into the output directory.
    Render {
        /// Ticker symbols, e.g. AAPL MSFT
        #[arg(required = true)]
        symbols: Vec<String>,
        /// Directory holding <SYMBOL>.csv exports
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Directory the PNGs are written to
        #[arg(long, default_value = "graphs")]
        out_dir: PathBuf,
        /// TOML file overriding interpolation and style settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Theme preset (print, light, dark)
        #[arg(long)]
        theme: Option<String>,
        /// Curve points per sample
        #[arg(long)]
        density: Option<usize>,
        /// Fit each trading day separately instead of one curve across closures
        #[arg(long)]
        per_session: bool,
    },
    /// Print sample counts, gaps, sampling intervals and price statistics.
    Diagnose {
        symbol: String,
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Report pauses longer than this many hours
        #[arg(long, default_value_t = 1.0)]
        gap_hours: f64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\nError: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Render { symbols, data_dir, out_dir, config, theme, density, per_session } => {
            let mut cfg = match config {
                Some(path) => ChartConfig::load(&path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?,
                None => ChartConfig::default(),
            };
            if let Some(theme) = theme {
                cfg.style.theme = theme;
            }
            if let Some(density) = density {
                cfg.interpolation.density = density;
            }
            if per_session {
                cfg.interpolation.interpolate_across_sessions = false;
            }
            cfg.validate().context("invalid chart settings")?;
            log::debug!("settings: {cfg:?}");

            let source = CsvSource::new(&data_dir);
            let now = chrono::Local::now();
            println!("Processing {} symbol(s) from {}", symbols.len(), data_dir.display());
            let summary = run_batch(&source, &symbols, &cfg, &out_dir, &now);

            println!("\nSummary:");
            println!("  Successful: {}", summary.succeeded.len());
            println!("  Failed: {}", summary.failed.len());
            for (symbol, path) in &summary.succeeded {
                println!("  {symbol}: {}", path.display());
            }
            for (symbol, error) in &summary.failed {
                println!("  {symbol}: {error}");
            }
            Ok(summary.all_succeeded())
        }
        Command::Diagnose { symbol, data_dir, gap_hours } => {
            let source = CsvSource::new(&data_dir);
            let samples = source
                .fetch(&symbol)
                .with_context(|| format!("failed to read samples for {}", symbol.to_uppercase()))?;
            let threshold = chrono::Duration::seconds((gap_hours * 3600.0).round() as i64);
            let report = SeriesReport::with_gap_threshold(&samples, threshold)
                .with_context(|| format!("no samples for {}", symbol.to_uppercase()))?;

            println!("Diagnosing ticker: {}", symbol.to_uppercase());
            println!("{}", "=".repeat(60));
            println!("{report}");
            println!("{}", "=".repeat(60));
            Ok(true)
        }
    }
}
