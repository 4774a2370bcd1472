use crate::evaluation::Estimator;
use crate::evaluation::metrics::percentile_sorted;
use crate::utils::math::mean_of;

/// Arithmetic mean `x̄`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleMean;

impl Estimator for SampleMean {
    fn name(&self) -> &str {
        "mean"
    }

    #[inline]
    fn estimate(&self, sample: &[f64]) -> f64 {
        mean_of(sample)
    }
}

/// Sample median (average of the two middle values for even sizes).
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleMedian;

impl Estimator for SampleMedian {
    fn name(&self) -> &str {
        "median"
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        median(sample)
    }
}

pub(crate) fn median(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    percentile_sorted(&sorted, 50.0)
}
