use crate::core::Sample;
use crate::samplers::Sampler;

/// Replays a fixed list of samples in order, wrapping around at the end.
///
/// Each sample is truncated or cycled to the requested size, so callers get
/// exactly `n` values.
pub struct FixedSampler {
    pub samples: Vec<Sample>,
    idx: usize,
    draws: usize,
}

impl FixedSampler {
    pub fn new(samples: Vec<Sample>) -> Self {
        assert!(
            samples.iter().all(|s| !s.is_empty()),
            "FixedSampler needs non-empty samples"
        );
        assert!(!samples.is_empty(), "FixedSampler needs at least one sample");
        Self {
            samples,
            idx: 0,
            draws: 0,
        }
    }

    /// Number of `draw` calls since construction or the last restart.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Sampler for FixedSampler {
    fn describe(&self) -> String {
        format!("Fixed({} samples)", self.samples.len())
    }

    fn draw(&mut self, n: usize) -> Sample {
        let base = &self.samples[self.idx % self.samples.len()];
        self.idx += 1;
        self.draws += 1;
        base.iter().copied().cycle().take(n).collect()
    }

    fn restart(&mut self) {
        self.idx = 0;
        self.draws = 0;
    }
}
