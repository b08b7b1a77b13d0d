// File: crates/ticker-chart-core/src/error.rs
// Summary: Fatal error type for the chart pipeline and the non-fatal warnings it signals.

use std::fmt;

/// Fatal conditions. Any of these means no image is produced for the symbol.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("series has no samples")]
    EmptyInput,

    #[error("could not fetch samples for '{symbol}': {reason}")]
    Source { symbol: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back rendered pixels")]
    Readback,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Non-fatal conditions. The pipeline keeps going and renders a simpler image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Warning {
    /// Too few samples for a spline; the raw points are used as the curve.
    InsufficientData { samples: usize },
    /// Only one session in the series, so the x axis carries a single label.
    DegenerateLayout { sessions: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InsufficientData { samples } => {
                write!(f, "only {samples} samples; drawing unsmoothed points")
            }
            Warning::DegenerateLayout { sessions } => {
                write!(f, "{sessions} session(s); layout has a single date label")
            }
        }
    }
}
