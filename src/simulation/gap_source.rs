use rand::Rng;
use rand_distr::{Distribution, Exp};

use crate::error::EstimationError;
use crate::samplers::generators::exponential;

/// Supplies inter-event gaps to the event simulator.
///
/// Gaps are expected to be non-negative; a NaN or negative gap is treated as
/// the end of the interval.
pub trait GapSource {
    fn next_gap(&mut self) -> f64;
}

impl<G: GapSource + ?Sized> GapSource for &mut G {
    fn next_gap(&mut self) -> f64 {
        (**self).next_gap()
    }
}

/// Exponential(λ) gaps drawn from a borrowed generator.
pub struct ExponentialGaps<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    dist: Exp<f64>,
}

impl<'a, R: Rng + ?Sized> ExponentialGaps<'a, R> {
    pub fn new(rate: f64, rng: &'a mut R) -> Result<Self, EstimationError> {
        Ok(Self {
            rng,
            dist: exponential(rate)?,
        })
    }
}

impl<R: Rng + ?Sized> GapSource for ExponentialGaps<'_, R> {
    #[inline]
    fn next_gap(&mut self) -> f64 {
        self.dist.sample(&mut *self.rng)
    }
}
