//! Error metrics over a collection of estimates.
//!
//! All functions take the estimates as a plain slice so they can be applied
//! to an [`EstimateCollection`](crate::core::EstimateCollection) or to any
//! ad-hoc list of numbers.
//!
//! Percentiles use linear interpolation between the two bracketing order
//! statistics (R-7 / Hyndman & Fan type 7), the definition used by R, NumPy
//! and spreadsheets.

use crate::core::ConfidenceInterval;
use crate::error::EstimationError;
use crate::utils::math::kahan_sum;

fn ensure_non_empty(estimates: &[f64]) -> Result<(), EstimationError> {
    if estimates.is_empty() {
        return Err(EstimationError::invalid("estimates must not be empty"));
    }
    Ok(())
}

/// Arithmetic mean of `(estimate - actual)^2`.
pub fn mean_squared_error(estimates: &[f64], actual: f64) -> Result<f64, EstimationError> {
    ensure_non_empty(estimates)?;
    let squared: Vec<f64> = estimates
        .iter()
        .map(|e| {
            let d = e - actual;
            d * d
        })
        .collect();
    Ok(kahan_sum(&squared) / estimates.len() as f64)
}

/// Square root of [`mean_squared_error`].
///
/// Used as the standard error of an estimator when `actual` is the true
/// parameter.
pub fn root_mean_squared_error(estimates: &[f64], actual: f64) -> Result<f64, EstimationError> {
    mean_squared_error(estimates, actual).map(f64::sqrt)
}

/// Signed arithmetic mean of `(estimate - actual)`.
///
/// A mean error that stays away from zero as the number of trials grows
/// marks a biased estimator.
pub fn mean_error(estimates: &[f64], actual: f64) -> Result<f64, EstimationError> {
    ensure_non_empty(estimates)?;
    let deviations: Vec<f64> = estimates.iter().map(|e| e - actual).collect();
    Ok(kahan_sum(&deviations) / estimates.len() as f64)
}

/// Value at rank `p` (in `[0, 100]`) of the sorted estimates.
pub fn percentile(estimates: &[f64], p: f64) -> Result<f64, EstimationError> {
    ensure_non_empty(estimates)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(EstimationError::invalid(format!(
            "percentile rank must be in [0, 100], got {p}"
        )));
    }
    let sorted = sorted_copy(estimates);
    Ok(percentile_sorted(&sorted, p))
}

/// Central empirical interval holding `level` of the estimates.
///
/// `level = 0.9` gives the 5th/95th percentile pair.
pub fn confidence_interval(
    estimates: &[f64],
    level: f64,
) -> Result<ConfidenceInterval, EstimationError> {
    ensure_non_empty(estimates)?;
    if !(level > 0.0 && level < 1.0) {
        return Err(EstimationError::invalid(format!(
            "confidence level must be in (0, 1), got {level}"
        )));
    }
    let sorted = sorted_copy(estimates);
    let tail = (1.0 - level) / 2.0 * 100.0;
    Ok(ConfidenceInterval {
        level,
        low: percentile_sorted(&sorted, tail),
        high: percentile_sorted(&sorted, 100.0 - tail),
    })
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// R-7 percentile on pre-sorted, non-empty data with `p` already validated.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p / 100.0;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_estimates_have_zero_error() {
        let v = [3.5; 10];
        assert_eq!(mean_error(&v, 3.5).unwrap(), 0.0);
        assert_eq!(root_mean_squared_error(&v, 3.5).unwrap(), 0.0);
    }

    #[test]
    fn mse_and_mean_error_by_hand() {
        let v = [1.0, 2.0, 3.0];
        // deviations from 2.5: -1.5, -0.5, 0.5
        assert!((mean_error(&v, 2.5).unwrap() + 0.5).abs() < 1e-12);
        let mse = (2.25 + 0.25 + 0.25) / 3.0;
        assert!((mean_squared_error(&v, 2.5).unwrap() - mse).abs() < 1e-12);
        assert!((root_mean_squared_error(&v, 2.5).unwrap() - mse.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            mean_squared_error(&empty, 0.0),
            Err(EstimationError::InvalidArgument(_))
        ));
        assert!(root_mean_squared_error(&empty, 0.0).is_err());
        assert!(mean_error(&empty, 0.0).is_err());
        assert!(percentile(&empty, 50.0).is_err());
        assert!(confidence_interval(&empty, 0.9).is_err());
    }

    #[test]
    fn percentile_rank_out_of_range_is_rejected() {
        let v = [1.0, 2.0];
        assert!(percentile(&v, -0.1).is_err());
        assert!(percentile(&v, 100.1).is_err());
        assert!(percentile(&v, f64::NAN).is_err());
    }

    #[test]
    fn percentile_interpolates_between_order_statistics() {
        let v = [40.0, 10.0, 30.0, 20.0];
        assert_eq!(percentile(&v, 0.0).unwrap(), 10.0);
        assert_eq!(percentile(&v, 100.0).unwrap(), 40.0);
        assert!((percentile(&v, 50.0).unwrap() - 25.0).abs() < 1e-12);
        // h = 3 * 0.25 = 0.75 -> 10 + 0.75 * 10
        assert!((percentile(&v, 25.0).unwrap() - 17.5).abs() < 1e-12);
    }

    #[test]
    fn percentile_50_is_median_for_odd_length() {
        let v = [5.0, 1.0, 9.0, 3.0, 7.0];
        assert_eq!(percentile(&v, 50.0).unwrap(), 5.0);
    }

    #[test]
    fn single_value_percentile() {
        assert_eq!(percentile(&[4.2], 13.0).unwrap(), 4.2);
    }

    #[test]
    fn ninety_percent_interval_uses_5th_and_95th() {
        let v: Vec<f64> = (0..=100).map(f64::from).collect();
        let ci = confidence_interval(&v, 0.9).unwrap();
        assert!((ci.low - 5.0).abs() < 1e-9);
        assert!((ci.high - 95.0).abs() < 1e-9);
        assert_eq!(ci.level, 0.9);
    }

    #[test]
    fn confidence_level_bounds() {
        let v = [1.0, 2.0, 3.0];
        assert!(confidence_interval(&v, 0.0).is_err());
        assert!(confidence_interval(&v, 1.0).is_err());
        assert!(confidence_interval(&v, 0.5).is_ok());
    }
}
