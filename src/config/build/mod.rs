mod error;
mod estimators;
mod samplers;
mod tasks;

pub use error::BuildError;

pub use estimators::build_estimator;
pub use samplers::build_sampler;
pub use tasks::build_task;
