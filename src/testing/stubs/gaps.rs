use crate::simulation::GapSource;

/// Always returns the same gap and counts how many were drawn.
pub struct ConstantGaps {
    gap: f64,
    drawn: usize,
}

impl ConstantGaps {
    pub fn new(gap: f64) -> Self {
        Self { gap, drawn: 0 }
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl GapSource for ConstantGaps {
    fn next_gap(&mut self) -> f64 {
        self.drawn += 1;
        self.gap
    }
}

/// Replays a fixed list of gaps, then returns `+inf` so any run terminates.
pub struct ScriptedGaps {
    gaps: Vec<f64>,
    idx: usize,
}

impl ScriptedGaps {
    pub fn new(gaps: Vec<f64>) -> Self {
        Self { gaps, idx: 0 }
    }
}

impl GapSource for ScriptedGaps {
    fn next_gap(&mut self) -> f64 {
        let gap = self.gaps.get(self.idx).copied().unwrap_or(f64::INFINITY);
        self.idx += 1;
        gap
    }
}
