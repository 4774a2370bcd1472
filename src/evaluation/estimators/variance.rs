use crate::evaluation::Estimator;
use crate::utils::math::sum_squared_deviations;

/// Sample variance with divisor `n - ddof`.
///
/// `ddof = 0` is the maximum-likelihood (biased) estimator `S²`;
/// `ddof = 1` applies Bessel's correction and is unbiased (`S²ₙ₋₁`).
#[derive(Debug, Clone)]
pub struct SampleVariance {
    ddof: usize,
    name: String,
}

impl SampleVariance {
    pub fn with_ddof(ddof: usize) -> Self {
        let name = match ddof {
            0 => "biased_variance".to_string(),
            1 => "unbiased_variance".to_string(),
            k => format!("variance_ddof{k}"),
        };
        Self { ddof, name }
    }

    pub fn biased() -> Self {
        Self::with_ddof(0)
    }

    pub fn unbiased() -> Self {
        Self::with_ddof(1)
    }

    pub fn ddof(&self) -> usize {
        self.ddof
    }
}

impl Estimator for SampleVariance {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        if sample.len() <= self.ddof {
            return f64::NAN;
        }
        sum_squared_deviations(sample) / (sample.len() - self.ddof) as f64
    }

    fn min_sample_size(&self) -> usize {
        self.ddof.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn divisors() {
        assert!((SampleVariance::biased().estimate(&DATA) - 4.0).abs() < 1e-12);
        assert!((SampleVariance::unbiased().estimate(&DATA) - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn too_small_sample_is_nan() {
        assert!(SampleVariance::unbiased().estimate(&[1.0]).is_nan());
        assert_eq!(SampleVariance::biased().estimate(&[1.0]), 0.0);
    }

    #[test]
    fn names_and_minimum_sizes() {
        assert_eq!(SampleVariance::biased().name(), "biased_variance");
        assert_eq!(SampleVariance::unbiased().name(), "unbiased_variance");
        assert_eq!(SampleVariance::with_ddof(3).name(), "variance_ddof3");
        assert_eq!(SampleVariance::biased().min_sample_size(), 1);
        assert_eq!(SampleVariance::unbiased().min_sample_size(), 2);
    }

    #[test]
    fn huge_ddof_saturates_instead_of_overflowing() {
        let v = SampleVariance::with_ddof(usize::MAX);
        assert_eq!(v.min_sample_size(), usize::MAX);
        assert!(v.estimate(&DATA).is_nan());
    }
}
