//! Incremental one-step-ahead forecasting over growing history windows

use crate::data::PreparedSeries;
use crate::error::Result;
use crate::models::{ForecastModel, LinearRegression, TrainedForecastModel};
use serde::Serialize;

/// One-step-ahead forecast for a single series prefix.
///
/// `history` is exactly `values[0..=index]`; `predicted` is the model's
/// estimate of the value that would follow it.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    /// Position of the latest observed value on the time axis
    pub index: usize,
    /// Category label of the record at `index`
    pub category: String,
    /// The observed prefix the model was fit on
    pub history: Vec<f64>,
    /// Predicted next value
    pub predicted: f64,
}

/// Walks a prepared series front to back, refitting its model on every
/// prefix and emitting one [`ForecastPoint`] per index.
///
/// The model is refit from scratch at each step so every forecast reflects
/// exactly what the model knew at that prefix length. The O(n) fit per
/// step makes a full run O(n^2); series sizes are bounded by one uploaded
/// table, so no incremental coefficient update is attempted.
#[derive(Debug, Clone)]
pub struct IncrementalForecaster<M: ForecastModel = LinearRegression> {
    model: M,
}

impl IncrementalForecaster<LinearRegression> {
    /// Create a forecaster with the default lag-1 linear regression model
    pub fn new() -> Self {
        Self {
            model: LinearRegression::new(),
        }
    }
}

impl Default for IncrementalForecaster<LinearRegression> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ForecastModel> IncrementalForecaster<M> {
    /// Create a forecaster with a custom model
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Get the underlying model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Emit one forecast per index in `[1, n-1]`.
    ///
    /// Index 0 is skipped: a single observation supports no fit. For a
    /// series of length `n` this yields exactly `n - 1` points, in
    /// ascending index order.
    pub fn run(&self, series: &PreparedSeries) -> Result<Vec<ForecastPoint>> {
        let values = series.values();
        let categories = series.categories();

        let mut points = Vec::with_capacity(values.len().saturating_sub(1));
        for index in 1..values.len() {
            let history = &values[..=index];

            let trained = self.model.fit(history)?;
            let predicted = trained.predict_next(history[history.len() - 1]);

            log::debug!(
                "forecast index {} ({}): {} -> {:.4}",
                index,
                categories[index],
                trained.name(),
                predicted
            );

            points.push(ForecastPoint {
                index,
                category: categories[index].clone(),
                history: history.to_vec(),
                predicted,
            });
        }

        Ok(points)
    }
}
