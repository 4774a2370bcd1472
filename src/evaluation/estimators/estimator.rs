/// Point estimator: maps one sample to a single guess of a population
/// parameter.
///
/// Estimators are stateless; the harness applies every estimator to the same
/// sample within a trial.
pub trait Estimator {
    /// Unique key under which the harness files this estimator's results.
    fn name(&self) -> &str;

    /// Computes the estimate. `sample` holds at least [`min_sample_size`] values.
    ///
    /// [`min_sample_size`]: Estimator::min_sample_size
    fn estimate(&self, sample: &[f64]) -> f64;

    /// Smallest sample for which the estimate is defined.
    fn min_sample_size(&self) -> usize {
        1
    }
}

impl<E: Estimator + ?Sized> Estimator for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        (**self).estimate(sample)
    }

    fn min_sample_size(&self) -> usize {
        (**self).min_sample_size()
    }
}

impl<E: Estimator + ?Sized> Estimator for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        (**self).estimate(sample)
    }

    fn min_sample_size(&self) -> usize {
        (**self).min_sample_size()
    }
}
