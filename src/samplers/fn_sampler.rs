use crate::core::Sample;
use crate::samplers::Sampler;

/// Adapts a closure `FnMut(n) -> Sample` into a [`Sampler`].
///
/// The closure is responsible for its own randomness; `restart` is a no-op.
pub struct FnSampler<F> {
    label: String,
    draw: F,
}

impl<F> FnSampler<F>
where
    F: FnMut(usize) -> Sample,
{
    pub fn new<L: Into<String>>(label: L, draw: F) -> Self {
        Self {
            label: label.into(),
            draw,
        }
    }
}

impl<F> Sampler for FnSampler<F>
where
    F: FnMut(usize) -> Sample,
{
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn draw(&mut self, n: usize) -> Sample {
        (self.draw)(n)
    }

    fn restart(&mut self) {}
}
