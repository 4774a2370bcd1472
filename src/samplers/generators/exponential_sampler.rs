use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp};

use crate::core::Sample;
use crate::error::EstimationError;
use crate::samplers::Sampler;

/// Exponential(λ) sampler backed by a seeded `StdRng`. Mean is `1/λ`.
#[derive(Debug)]
pub struct ExponentialSampler {
    seed: u64,
    rng: StdRng,
    dist: Exp<f64>,
    rate: f64,
}

impl ExponentialSampler {
    pub fn new(rate: f64, seed: u64) -> Result<Self, EstimationError> {
        let dist = exponential(rate)?;
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            dist,
            rate,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Validated `Exp(rate)`; `rate` must be finite and strictly positive.
pub(crate) fn exponential(rate: f64) -> Result<Exp<f64>, EstimationError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(EstimationError::invalid(format!(
            "exponential rate must be finite and > 0, got {rate}"
        )));
    }
    Exp::new(rate).map_err(|e| EstimationError::invalid(format!("exponential rate: {e}")))
}

impl Sampler for ExponentialSampler {
    fn describe(&self) -> String {
        format!("Exponential(rate={})", self.rate)
    }

    fn draw(&mut self, n: usize) -> Sample {
        (0..n).map(|_| self.dist.sample(&mut self.rng)).collect()
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
