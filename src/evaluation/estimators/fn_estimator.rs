use crate::evaluation::Estimator;

/// Named closure estimator.
pub struct FnEstimator<F> {
    name: String,
    min_sample_size: usize,
    f: F,
}

impl<F> FnEstimator<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new<N: Into<String>>(name: N, f: F) -> Self {
        Self {
            name: name.into(),
            min_sample_size: 1,
            f,
        }
    }

    pub fn with_min_sample_size(mut self, n: usize) -> Self {
        self.min_sample_size = n;
        self
    }
}

impl<F> Estimator for FnEstimator<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        (self.f)(sample)
    }

    fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }
}
