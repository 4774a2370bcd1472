use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::core::EstimateCollection;
use crate::error::EstimationError;
use crate::evaluation::{Report, repeat_trials};
use crate::simulation::simulate_rate_estimate;
use crate::tasks::Task;

/// Name under which the event-count estimator is reported.
pub const EVENT_COUNT: &str = "event_count";

/// Repeats the bounded-interval event simulation and scores the counts
/// against the true rate.
pub struct RateSimulationTask {
    rate: f64,
    iters: usize,
    confidence: f64,
    seed: u64,
    rng: StdRng,

    last: Option<EstimateCollection>,
}

impl RateSimulationTask {
    pub fn new(
        rate: f64,
        iters: usize,
        confidence: f64,
        seed: u64,
    ) -> Result<Self, EstimationError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(EstimationError::invalid(format!(
                "rate must be finite and > 0, got {rate}"
            )));
        }
        if iters == 0 {
            return Err(EstimationError::invalid("iters must be > 0"));
        }
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(EstimationError::invalid(format!(
                "confidence must be in (0, 1), got {confidence}"
            )));
        }
        Ok(Self {
            rate,
            iters,
            confidence,
            seed,
            rng: StdRng::seed_from_u64(seed),
            last: None,
        })
    }

    /// Counts from the most recent run.
    pub fn counts(&self) -> Option<&EstimateCollection> {
        self.last.as_ref()
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.last = None;
    }
}

impl Task for RateSimulationTask {
    fn describe(&self) -> String {
        format!("event rate {} (iters={})", self.rate, self.iters)
    }

    fn run(&mut self) -> Result<Report, EstimationError> {
        let rate = self.rate;
        let rng = &mut self.rng;
        let counts = repeat_trials(self.iters, || {
            simulate_rate_estimate(rate, &mut *rng).map(|c| c as f64)
        })?;

        let mut report = Report::default();
        let summary = counts.summarize(EVENT_COUNT, rate, self.confidence)?;
        info!(task = %self.describe(), "{summary}");
        report.push(summary);
        self.last = Some(counts);
        Ok(report)
    }
}
