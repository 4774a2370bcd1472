use tracing::info;

use crate::error::EstimationError;
use crate::evaluation::{Estimator, Evaluation, Report, check_estimators, evaluate};
use crate::samplers::Sampler;
use crate::tasks::Task;

/// Repeated-sampling comparison of estimators against a known parameter.
pub struct EstimationTask {
    sampler: Box<dyn Sampler>,
    estimators: Vec<Box<dyn Estimator>>,
    true_value: f64,
    sample_size: usize,
    iters: usize,
    confidence: f64,

    last: Option<Evaluation>,
}

impl EstimationTask {
    pub fn new(
        sampler: Box<dyn Sampler>,
        estimators: Vec<Box<dyn Estimator>>,
        true_value: f64,
        sample_size: usize,
        iters: usize,
        confidence: f64,
    ) -> Result<Self, EstimationError> {
        if sample_size == 0 {
            return Err(EstimationError::invalid("sample_size must be > 0"));
        }
        if iters == 0 {
            return Err(EstimationError::invalid("iters must be > 0"));
        }
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(EstimationError::invalid(format!(
                "confidence must be in (0, 1), got {confidence}"
            )));
        }
        if !true_value.is_finite() {
            return Err(EstimationError::invalid(format!(
                "true value must be finite, got {true_value}"
            )));
        }
        check_estimators(&estimators, sample_size)?;

        Ok(Self {
            sampler,
            estimators,
            true_value,
            sample_size,
            iters,
            confidence,
            last: None,
        })
    }

    /// Raw estimates of the most recent run.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    pub fn restart(&mut self) {
        self.sampler.restart();
        self.last = None;
    }
}

impl Task for EstimationTask {
    fn describe(&self) -> String {
        format!(
            "estimate {} from {} (n={}, iters={})",
            self.true_value,
            self.sampler.describe(),
            self.sample_size,
            self.iters
        )
    }

    fn run(&mut self) -> Result<Report, EstimationError> {
        let evaluation = evaluate(
            &mut self.sampler,
            &self.estimators,
            self.true_value,
            self.sample_size,
            self.iters,
        )?;
        let report = evaluation.summarize(self.confidence)?;
        for s in report.entries() {
            info!(task = %self.describe(), "{s}");
        }
        self.last = Some(evaluation);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{SampleMean, SampleMedian, SampleVariance};
    use crate::samplers::GaussianSampler;
    use crate::testing::FixedSampler;

    fn gaussian() -> Box<dyn Sampler> {
        Box::new(GaussianSampler::new(0.0, 1.0, 42).unwrap())
    }

    fn estimators() -> Vec<Box<dyn Estimator>> {
        vec![Box::new(SampleMean), Box::new(SampleMedian)]
    }

    #[test]
    fn ctor_guards() {
        assert!(EstimationTask::new(gaussian(), estimators(), 0.0, 0, 10, 0.9).is_err());
        assert!(EstimationTask::new(gaussian(), estimators(), 0.0, 7, 0, 0.9).is_err());
        assert!(EstimationTask::new(gaussian(), estimators(), 0.0, 7, 10, 1.0).is_err());
        assert!(EstimationTask::new(gaussian(), estimators(), 0.0, 7, 10, 0.0).is_err());
        assert!(EstimationTask::new(gaussian(), Vec::new(), 0.0, 7, 10, 0.9).is_err());
        assert!(EstimationTask::new(gaussian(), estimators(), f64::NAN, 7, 10, 0.9).is_err());
    }

    #[test]
    fn ctor_rejects_estimators_that_cannot_run() {
        let twice: Vec<Box<dyn Estimator>> = vec![Box::new(SampleMean), Box::new(SampleMean)];
        assert!(EstimationTask::new(gaussian(), twice, 0.0, 7, 10, 0.9).is_err());

        let variance: Vec<Box<dyn Estimator>> = vec![Box::new(SampleVariance::unbiased())];
        let err = EstimationTask::new(gaussian(), variance, 1.0, 1, 10, 0.9)
            .err()
            .unwrap();
        assert_eq!(
            err,
            EstimationError::InvalidArgument(
                "estimator 'unbiased_variance' needs samples of at least 2 values, got n=1".into()
            )
        );
    }

    #[test]
    fn run_reports_each_estimator_and_keeps_evaluation() {
        let mut t = EstimationTask::new(gaussian(), estimators(), 0.0, 7, 200, 0.9).unwrap();
        assert!(t.evaluation().is_none());
        let report = t.run().unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.get("mean").is_some() && report.get("median").is_some());
        assert_eq!(t.evaluation().unwrap().get("mean").unwrap().len(), 200);
    }

    #[test]
    fn restart_reproduces_report() {
        let mut t = EstimationTask::new(gaussian(), estimators(), 0.0, 7, 100, 0.9).unwrap();
        let first = t.run().unwrap();
        t.restart();
        assert!(t.evaluation().is_none());
        assert_eq!(first, t.run().unwrap());
    }

    #[test]
    fn deterministic_sampler_gives_exact_summary() {
        let s: Box<dyn Sampler> = Box::new(FixedSampler::new(vec![vec![1.0, 1.0, 4.0]]));
        let mut t = EstimationTask::new(s, estimators(), 1.0, 3, 5, 0.9).unwrap();
        let r = t.run().unwrap();
        assert_eq!(r.get("mean").unwrap().mean_error, 1.0);
        assert_eq!(r.get("median").unwrap().mean_error, 0.0);
        assert_eq!(r.get("median").unwrap().rmse, 0.0);
    }

    #[test]
    fn describe_mentions_sampler() {
        let t = EstimationTask::new(gaussian(), estimators(), 0.0, 7, 10, 0.9).unwrap();
        assert_eq!(
            t.describe(),
            "estimate 0 from Gaussian(mu=0, sigma=1) (n=7, iters=10)"
        );
    }
}
