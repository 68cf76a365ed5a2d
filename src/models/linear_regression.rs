//! Lag-1 linear regression for one-step-ahead forecasting

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, TrainedForecastModel};

/// Ordinary-least-squares model predicting each value from its immediate
/// predecessor (`y = slope * x + intercept`).
///
/// Fitting builds one training pair per adjacent observation in the
/// history: inputs `history[0..n-1]`, targets `history[1..n]`. The fit is
/// recomputed from scratch on every call; there is no streaming update of
/// the coefficients.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Name of the model
    name: String,
}

/// Trained lag-1 linear regression model
#[derive(Debug, Clone)]
pub struct TrainedLinearRegression {
    /// Name of the model
    name: String,
    /// Fitted slope
    slope: f64,
    /// Fitted intercept
    intercept: f64,
    /// Number of training pairs the fit saw
    pairs: usize,
}

impl LinearRegression {
    /// Create a new lag-1 linear regression model
    pub fn new() -> Self {
        Self {
            name: "Lag-1 Linear Regression".to_string(),
        }
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearRegression {
    type Trained = TrainedLinearRegression;

    fn fit(&self, history: &[f64]) -> Result<TrainedLinearRegression> {
        if history.len() < 2 {
            return Err(ForecastError::ValidationError(format!(
                "Insufficient data for lag-1 regression. Need at least 2 observations, got {}.",
                history.len()
            )));
        }

        let inputs = &history[..history.len() - 1];
        let targets = &history[1..];
        let n = inputs.len() as f64;

        let x_mean = inputs.iter().sum::<f64>() / n;
        let y_mean = targets.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&x, &y) in inputs.iter().zip(targets.iter()) {
            sxx += (x - x_mean) * (x - x_mean);
            sxy += (x - x_mean) * (y - y_mean);
        }

        // Degenerate fit: all training inputs identical (including the
        // single-pair case). The slope is taken as zero and the intercept
        // as the target mean, so the prediction collapses to mean(y).
        let (slope, intercept) = if sxx == 0.0 {
            (0.0, y_mean)
        } else {
            let slope = sxy / sxx;
            (slope, y_mean - slope * x_mean)
        };

        Ok(TrainedLinearRegression {
            name: self.name.clone(),
            slope,
            intercept,
            pairs: inputs.len(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearRegression {
    /// Get the fitted slope
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the number of training pairs used for the fit
    pub fn pairs(&self) -> usize {
        self.pairs
    }
}

impl TrainedForecastModel for TrainedLinearRegression {
    fn predict_next(&self, latest: f64) -> f64 {
        self.slope * latest + self.intercept
    }

    fn name(&self) -> &str {
        &self.name
    }
}
