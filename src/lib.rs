//! # Forecast Sales
//!
//! A Rust library for incremental sales forecasting and self-contained
//! report assembly.
//!
//! ## Features
//!
//! - Sales table ingestion (CSV or an existing polars DataFrame) with
//!   automatic sales/item-type column detection
//! - Category-ordered series preparation with a stable sort
//! - One-step-ahead forecasting with a lag-1 linear model, refit on every
//!   growing history prefix
//! - Fixed-size PNG panel rendering, fully in memory
//! - Single-file HTML report with inlined images and atomic writes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forecast_sales::data::DataLoader;
//! use forecast_sales::pipeline::run_forecast;
//!
//! fn main() -> forecast_sales::Result<()> {
//!     // Load the sales table
//!     let table = DataLoader::from_csv("sales.csv")?;
//!
//!     // Forecast every prefix and write the report
//!     let summary = run_forecast(&table, "sales_report.html")?;
//!
//!     println!("{} panel(s) -> {}", summary.rendered_panels, summary.artifact.display());
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use crate::data::{DataLoader, PreparedSeries, SalesTable};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::{ForecastPoint, IncrementalForecaster};
pub use crate::models::{ForecastModel, LinearRegression, TrainedForecastModel};
pub use crate::pipeline::{run_forecast, ForecastPipeline, RunSummary};
pub use crate::render::{PanelRenderer, RenderedPanel};
pub use crate::report::ReportComposer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
