mod estimates;
mod sample;

pub use estimates::{ConfidenceInterval, EstimateCollection};
pub use sample::Sample;
