use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::core::Sample;
use crate::error::EstimationError;
use crate::samplers::Sampler;

/// Gaussian(μ, σ) sampler backed by a seeded `StdRng`.
#[derive(Debug)]
pub struct GaussianSampler {
    seed: u64,
    rng: StdRng,
    dist: Normal<f64>,
    mu: f64,
    sigma: f64,
}

impl GaussianSampler {
    pub fn new(mu: f64, sigma: f64, seed: u64) -> Result<Self, EstimationError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(EstimationError::invalid(format!(
                "Gaussian requires finite mu and sigma > 0, got mu={mu}, sigma={sigma}"
            )));
        }
        let dist = Normal::new(mu, sigma)
            .map_err(|e| EstimationError::invalid(format!("Gaussian parameters: {e}")))?;
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            dist,
            mu,
            sigma,
        })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Sampler for GaussianSampler {
    fn describe(&self) -> String {
        format!("Gaussian(mu={}, sigma={})", self.mu, self.sigma)
    }

    fn draw(&mut self, n: usize) -> Sample {
        (0..n).map(|_| self.dist.sample(&mut self.rng)).collect()
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::mean_of;

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(GaussianSampler::new(0.0, 0.0, 1).is_err());
        assert!(GaussianSampler::new(0.0, -1.0, 1).is_err());
        assert!(GaussianSampler::new(f64::NAN, 1.0, 1).is_err());
        assert!(GaussianSampler::new(0.0, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn draw_has_requested_length() {
        let mut s = GaussianSampler::new(0.0, 1.0, 7).unwrap();
        assert_eq!(s.draw(7).len(), 7);
        assert!(s.draw(0).is_empty());
    }

    #[test]
    fn restart_repeats_sequence() {
        let mut s = GaussianSampler::new(90.0, 7.5, 2025).unwrap();
        let first: Vec<Sample> = (0..5).map(|_| s.draw(9)).collect();
        s.restart();
        let second: Vec<Sample> = (0..5).map(|_| s.draw(9)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn large_sample_matches_moments() {
        let mut s = GaussianSampler::new(90.0, 7.5, 42).unwrap();
        let v = s.draw(20_000);
        let m = mean_of(&v);
        assert!((m - 90.0).abs() < 0.25, "mean={m}");
        let var = v.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (v.len() - 1) as f64;
        assert!((var.sqrt() - 7.5).abs() < 0.25, "sd={}", var.sqrt());
    }

    #[test]
    fn describe_names_parameters() {
        let s = GaussianSampler::new(0.0, 1.0, 1).unwrap();
        assert_eq!(s.describe(), "Gaussian(mu=0, sigma=1)");
    }
}
