mod exponential_sampler;
mod gaussian_sampler;

pub(crate) use exponential_sampler::exponential;
pub use exponential_sampler::ExponentialSampler;
pub use gaussian_sampler::GaussianSampler;
