mod estimators;
mod evaluators;
mod measurement;
pub mod metrics;
mod preview;

pub use estimators::{
    Estimator, FnEstimator, RateFromMean, RateFromMedian, SampleMean, SampleMedian,
    SampleVariance,
};
pub use evaluators::{Evaluation, check_estimators, evaluate, repeat_trials};
pub use measurement::Measurement;
pub use metrics::{
    confidence_interval, mean_error, mean_squared_error, percentile, root_mean_squared_error,
};
pub use preview::{Report, Summary};
