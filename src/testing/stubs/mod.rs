pub mod fixed_sampler;
pub mod gaps;

pub use fixed_sampler::FixedSampler;
pub use gaps::{ConstantGaps, ScriptedGaps};
