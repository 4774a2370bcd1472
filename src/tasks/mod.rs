mod estimation_task;
mod rate_simulation_task;
mod task;

pub use estimation_task::EstimationTask;
pub use rate_simulation_task::{EVENT_COUNT, RateSimulationTask};
pub use task::Task;
