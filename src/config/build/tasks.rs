use crate::config::build::error::to_usize;
use crate::config::build::{BuildError, build_estimator, build_sampler};
use crate::config::choices::{EstimationParams, RateSimulationParams, TaskChoice};
use crate::evaluation::Estimator;
use crate::tasks::{EstimationTask, RateSimulationTask, Task};

impl TryFrom<EstimationParams> for EstimationTask {
    type Error = BuildError;

    fn try_from(parameters: EstimationParams) -> Result<Self, Self::Error> {
        let sampler = build_sampler(parameters.sampler)?;
        let estimators = parameters
            .estimators
            .into_iter()
            .map(build_estimator)
            .collect::<Result<Vec<Box<dyn Estimator>>, _>>()?;
        let sample_size = to_usize(parameters.sample_size, "sample_size")?;
        let iters = to_usize(parameters.iters, "iters")?;

        EstimationTask::new(
            sampler,
            estimators,
            parameters.true_value,
            sample_size,
            iters,
            parameters.confidence,
        )
        .map_err(BuildError::from)
    }
}

impl TryFrom<RateSimulationParams> for RateSimulationTask {
    type Error = BuildError;

    fn try_from(parameters: RateSimulationParams) -> Result<Self, Self::Error> {
        let iters = to_usize(parameters.iters, "iters")?;
        RateSimulationTask::new(parameters.rate, iters, parameters.confidence, parameters.seed)
            .map_err(BuildError::from)
    }
}

pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task>, BuildError> {
    match choice {
        TaskChoice::Estimation(p) => {
            let t = EstimationTask::try_from(p)?;
            Ok(Box::new(t))
        }
        TaskChoice::RateSimulation(p) => {
            let t = RateSimulationTask::try_from(p)?;
            Ok(Box::new(t))
        }
    }
}
