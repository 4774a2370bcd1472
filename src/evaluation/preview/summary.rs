use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::core::ConfidenceInterval;

/// Bias and dispersion of one estimator over a run.
///
/// `rmse` is the standard error of the estimator around `actual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub estimator: String,
    pub trials: usize,
    pub actual: f64,
    pub mean_error: f64,
    pub rmse: f64,
    pub interval: ConfidenceInterval,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: trials={}, mean_error={:.6}, rmse={:.6}, {}",
            self.estimator, self.trials, self.mean_error, self.rmse, self.interval
        )
    }
}
