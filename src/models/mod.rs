//! Predictive models for one-step-ahead sales forecasting

use crate::error::Result;
use std::fmt::Debug;

/// Trained one-step-ahead model
pub trait TrainedForecastModel: Debug {
    /// Predict the next value given the latest observed value
    fn predict_next(&self, latest: f64) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be fit on an observed history
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Fit the model on the observed history so far
    fn fit(&self, history: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear_regression;

pub use linear_regression::{LinearRegression, TrainedLinearRegression};
