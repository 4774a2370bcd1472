//! Ready-made experiments from the estimation walkthrough.
//!
//! Each preset returns a [`TaskChoice`] so it can be serialized, tweaked and
//! built like any other configuration.

use crate::config::choices::{
    EstimationParams, EstimatorChoice, ExponentialParameters, GaussianParameters,
    RateSimulationParams, SamplerChoice, TaskChoice,
};

const ITERS: u64 = 1000;
const SEED: u64 = 17;

fn gaussian(mu: f64, sigma: f64) -> SamplerChoice {
    SamplerChoice::Gaussian(GaussianParameters {
        mu,
        sigma,
        seed: SEED,
    })
}

/// Mean vs. median as estimators of μ for Gaussian(0, 1), n = 7.
pub fn mean_vs_median() -> TaskChoice {
    TaskChoice::Estimation(EstimationParams {
        sampler: gaussian(0.0, 1.0),
        estimators: vec![EstimatorChoice::mean(), EstimatorChoice::median()],
        true_value: 0.0,
        sample_size: 7,
        iters: ITERS,
        confidence: 0.9,
    })
}

/// Divisor `n` vs. `n - 1` as estimators of σ² = 1, n = 7.
pub fn biased_vs_unbiased_variance() -> TaskChoice {
    TaskChoice::Estimation(EstimationParams {
        sampler: gaussian(0.0, 1.0),
        estimators: vec![EstimatorChoice::variance(0), EstimatorChoice::variance(1)],
        true_value: 1.0,
        sample_size: 7,
        iters: ITERS,
        confidence: 0.9,
    })
}

/// Sampling distribution of x̄ for Gaussian(90, 7.5), n = 9, with its 90%
/// interval and standard error.
pub fn sampling_distribution_of_mean() -> TaskChoice {
    TaskChoice::Estimation(EstimationParams {
        sampler: gaussian(90.0, 7.5),
        estimators: vec![EstimatorChoice::mean()],
        true_value: 90.0,
        sample_size: 9,
        iters: ITERS,
        confidence: 0.9,
    })
}

/// `1/x̄` vs. `ln 2 / median` as estimators of λ = 2, n = 7.
pub fn exponential_rate() -> TaskChoice {
    TaskChoice::Estimation(EstimationParams {
        sampler: SamplerChoice::Exponential(ExponentialParameters {
            rate: 2.0,
            seed: SEED,
        }),
        estimators: vec![
            EstimatorChoice::rate_from_mean(),
            EstimatorChoice::rate_from_median(),
        ],
        true_value: 2.0,
        sample_size: 7,
        iters: ITERS,
        confidence: 0.9,
    })
}

/// Event counts in a unit interval as estimates of λ = 2.
pub fn event_rate() -> TaskChoice {
    TaskChoice::RateSimulation(RateSimulationParams {
        rate: 2.0,
        iters: ITERS,
        confidence: 0.9,
        seed: SEED,
    })
}

/// All presets with a short key, in walkthrough order.
pub fn all() -> Vec<(&'static str, TaskChoice)> {
    vec![
        ("mean-vs-median", mean_vs_median()),
        ("biased-vs-unbiased-variance", biased_vs_unbiased_variance()),
        ("sampling-distribution-of-mean", sampling_distribution_of_mean()),
        ("exponential-rate", exponential_rate()),
        ("event-rate", event_rate()),
    ]
}
