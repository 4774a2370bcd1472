use crate::core::Sample;

/// Pull-based source of i.i.d. samples from one fixed distribution.
///
/// Implementations own their random generator so that a run is reproducible
/// from its seed. Parallel callers must give each worker its own sampler
/// (with an independent seed) rather than sharing one.
pub trait Sampler {
    /// Human-readable description of the distribution, e.g. `Gaussian(μ=0, σ=1)`.
    fn describe(&self) -> String;

    /// Draws a fresh sample of exactly `n` values.
    fn draw(&mut self, n: usize) -> Sample;

    /// Re-seeds the generator so the next draws repeat the first run.
    fn restart(&mut self);
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn draw(&mut self, n: usize) -> Sample {
        (**self).draw(n)
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}
