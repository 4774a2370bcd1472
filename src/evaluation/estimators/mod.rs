mod estimator;
mod fn_estimator;
mod location;
mod rate;
mod variance;

pub use estimator::Estimator;
pub use fn_estimator::FnEstimator;
pub use location::{SampleMean, SampleMedian};
pub use rate::{RateFromMean, RateFromMedian};
pub use variance::SampleVariance;
