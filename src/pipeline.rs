//! End-to-end forecasting runs: prepare, forecast, render, compose

use crate::data::SalesTable;
use crate::error::Result;
use crate::forecaster::IncrementalForecaster;
use crate::models::{ForecastModel, LinearRegression};
use crate::render::PanelRenderer;
use crate::report::ReportComposer;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Summary of one completed forecasting run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Where the report artifact was written
    pub artifact: PathBuf,
    /// Number of forecast points produced
    pub forecast_points: usize,
    /// Number of panels that made it into the report
    pub rendered_panels: usize,
    /// Indices whose panels failed to render and were skipped
    pub skipped_panels: Vec<usize>,
}

impl RunSummary {
    /// Serialize the summary to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            crate::error::ForecastError::ValidationError(format!(
                "Failed to serialize run summary: {}",
                e
            ))
        })
    }
}

/// One-shot forecasting pipeline over an explicit sales table.
///
/// There is no ambient session state: the table is a plain value, read
/// once, and the run owns its output location. Indices are processed
/// strictly in increasing order, single-threaded.
#[derive(Debug, Clone)]
pub struct ForecastPipeline<M: ForecastModel = LinearRegression> {
    forecaster: IncrementalForecaster<M>,
    renderer: PanelRenderer,
    composer: ReportComposer,
}

impl ForecastPipeline<LinearRegression> {
    /// Create a pipeline with the default lag-1 linear regression model
    pub fn new() -> Self {
        Self {
            forecaster: IncrementalForecaster::new(),
            renderer: PanelRenderer::new(),
            composer: ReportComposer::new(),
        }
    }
}

impl Default for ForecastPipeline<LinearRegression> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ForecastModel> ForecastPipeline<M> {
    /// Create a pipeline with a custom forecasting model
    pub fn with_model(model: M) -> Self {
        Self {
            forecaster: IncrementalForecaster::with_model(model),
            renderer: PanelRenderer::new(),
            composer: ReportComposer::new(),
        }
    }

    /// Replace the report composer (e.g. for a custom document title)
    pub fn with_composer(mut self, composer: ReportComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Run the full pipeline and write the report artifact to `output`.
    ///
    /// A panel that fails to render is logged and skipped, while the
    /// remaining panels keep their ascending index order. Input and IO
    /// failures abort the run.
    pub fn run(&self, table: &SalesTable, output: &Path) -> Result<RunSummary> {
        let series = table.prepare()?;
        log::debug!("prepared series of {} record(s)", series.len());

        let points = self.forecaster.run(&series)?;
        let forecast_points = points.len();

        let mut panels = Vec::with_capacity(points.len());
        let mut skipped_panels = Vec::new();
        for point in &points {
            match self.renderer.render(point) {
                Ok(panel) => panels.push(panel),
                Err(err) => {
                    log::warn!("skipping panel {}: {}", point.index, err);
                    skipped_panels.push(point.index);
                }
            }
        }

        let rendered_panels = panels.len();
        let artifact = self.composer.compose(&panels, output)?;

        Ok(RunSummary {
            artifact,
            forecast_points,
            rendered_panels,
            skipped_panels,
        })
    }
}

/// Run a forecasting report over `table`, writing the artifact to `output`.
///
/// Convenience entry point using the default pipeline.
pub fn run_forecast<P: AsRef<Path>>(table: &SalesTable, output: P) -> Result<RunSummary> {
    ForecastPipeline::new().run(table, output.as_ref())
}
