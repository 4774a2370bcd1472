pub mod stubs;

pub use stubs::{ConstantGaps, FixedSampler, ScriptedGaps};
