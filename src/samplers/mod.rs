mod fn_sampler;
pub mod generators;
mod sampler;

pub use fn_sampler::FnSampler;
pub use generators::{ExponentialSampler, GaussianSampler};
pub use sampler::Sampler;
