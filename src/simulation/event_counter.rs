use rand::Rng;

use crate::error::EstimationError;
use crate::simulation::{ExponentialGaps, GapSource};

/// Length of the observation window.
pub const INTERVAL: f64 = 1.0;

/// Counts the events that complete inside one unit interval.
///
/// Gaps are accumulated while `elapsed + gap <= INTERVAL`; the first gap that
/// would push elapsed time past the interval ends the run and is not counted.
/// Landing exactly on the boundary still counts. A NaN or negative gap also
/// ends the run without being counted.
pub fn count_events<G: GapSource + ?Sized>(gaps: &mut G) -> u64 {
    let mut count = 0u64;
    let mut elapsed = 0.0;
    loop {
        let gap = gaps.next_gap();
        if gap.is_nan() || gap < 0.0 || elapsed + gap > INTERVAL {
            return count;
        }
        elapsed += gap;
        count += 1;
    }
}

/// Simulates a Poisson process with the given rate over one unit interval and
/// returns the number of events, a point estimate of `rate`.
pub fn simulate_rate_estimate<R: Rng + ?Sized>(
    rate: f64,
    rng: &mut R,
) -> Result<u64, EstimationError> {
    let mut gaps = ExponentialGaps::new(rate, rng)?;
    Ok(count_events(&mut gaps))
}
