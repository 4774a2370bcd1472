mod config_choice;
mod estimator_choice;
mod sampler_choice;
mod task_choice;

pub use config_choice::ConfigChoice;
pub use estimator_choice::*;
pub use sampler_choice::*;
pub use task_choice::*;
