use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::evaluation::{Summary, metrics};

/// Empirical interval `[low, high]` covering `level` of the estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub level: f64,
    pub low: f64,
    pub high: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Display for ConfidenceInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{:.0}% CI [{:.6}, {:.6}]",
            self.level * 100.0,
            self.low,
            self.high
        )
    }
}

/// Estimates produced by one estimator, one per trial.
///
/// Only the empirical distribution matters; the insertion order is kept but
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateCollection {
    values: Vec<f64>,
}

impl EstimateCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, estimate: f64) {
        self.values.push(estimate);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn mean_error(&self, actual: f64) -> Result<f64, EstimationError> {
        metrics::mean_error(&self.values, actual)
    }

    pub fn mean_squared_error(&self, actual: f64) -> Result<f64, EstimationError> {
        metrics::mean_squared_error(&self.values, actual)
    }

    pub fn root_mean_squared_error(&self, actual: f64) -> Result<f64, EstimationError> {
        metrics::root_mean_squared_error(&self.values, actual)
    }

    pub fn percentile(&self, p: f64) -> Result<f64, EstimationError> {
        metrics::percentile(&self.values, p)
    }

    pub fn confidence_interval(&self, level: f64) -> Result<ConfidenceInterval, EstimationError> {
        metrics::confidence_interval(&self.values, level)
    }

    /// Bias, standard error and the central `confidence` interval in one go.
    pub fn summarize<N: Into<String>>(
        &self,
        name: N,
        actual: f64,
        confidence: f64,
    ) -> Result<Summary, EstimationError> {
        Ok(Summary {
            estimator: name.into(),
            trials: self.len(),
            actual,
            mean_error: self.mean_error(actual)?,
            rmse: self.root_mean_squared_error(actual)?,
            interval: self.confidence_interval(confidence)?,
        })
    }
}

impl From<Vec<f64>> for EstimateCollection {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for EstimateCollection {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for EstimateCollection {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
