//! Errors raised at the I/O edges (loading datasets, writing rendered charts).
//!
//! Layout, formatting and interaction never fail; only reading input files and driving a drawing
//! backend can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
