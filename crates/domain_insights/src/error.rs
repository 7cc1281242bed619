//! Insight domain errors

use thiserror::Error;

/// Errors raised while building insight views
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Report export failed: {0}")]
    Export(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Aggregate overflowed: {0}")]
    Overflow(&'static str),
}
