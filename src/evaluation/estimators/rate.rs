use std::f64::consts::LN_2;

use crate::evaluation::Estimator;
use crate::evaluation::estimators::location::median;
use crate::utils::math::mean_of;

/// Exponential rate from the mean: `λ̂ = 1 / x̄`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RateFromMean;

impl Estimator for RateFromMean {
    fn name(&self) -> &str {
        "rate_from_mean"
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        1.0 / mean_of(sample)
    }
}

/// Exponential rate from the median: `λ̂ = ln 2 / median`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RateFromMedian;

impl Estimator for RateFromMedian {
    fn name(&self) -> &str {
        "rate_from_median"
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        LN_2 / median(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_location() {
        let v = [0.25, 0.5, 0.75];
        assert!((RateFromMean.estimate(&v) - 2.0).abs() < 1e-12);
        assert!((RateFromMedian.estimate(&v) - LN_2 / 0.5).abs() < 1e-12);
    }
}
