//! Error types for the forecast_sales crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the forecast_sales crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to the input table (empty, missing column, bad cell)
    #[error("Input error: {0}")]
    InputError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error rendering a single panel; the run continues without it
    #[error("Render error for panel {index}: {message}")]
    RenderError { index: usize, message: String },

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}
