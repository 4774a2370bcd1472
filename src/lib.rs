//! Monte Carlo evaluation of statistical estimators.
//!
//! Draw repeated samples from a known distribution, apply candidate
//! estimators to each sample and summarize the resulting sampling
//! distributions by bias (mean error), standard error (RMSE) and empirical
//! confidence intervals. A bounded-interval event simulator covers rate
//! estimation for Poisson processes.
//!
//! ```
//! use estimation_lab::evaluation::{Estimator, SampleMean, SampleMedian, evaluate};
//! use estimation_lab::samplers::GaussianSampler;
//!
//! let mut sampler = GaussianSampler::new(0.0, 1.0, 42).unwrap();
//! let estimators: Vec<Box<dyn Estimator>> = vec![Box::new(SampleMean), Box::new(SampleMedian)];
//! let evaluation = evaluate(&mut sampler, &estimators, 0.0, 7, 1000).unwrap();
//! let report = evaluation.summarize(0.9).unwrap();
//! assert_eq!(report.len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod samplers;
pub mod simulation;
pub mod tasks;
pub mod utils;

pub use error::EstimationError;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
