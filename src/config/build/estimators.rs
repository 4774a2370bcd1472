use crate::config::build::{BuildError, error::to_usize};
use crate::config::choices::EstimatorChoice;
use crate::evaluation::{
    Estimator, RateFromMean, RateFromMedian, SampleMean, SampleMedian, SampleVariance,
};

pub fn build_estimator(choice: EstimatorChoice) -> Result<Box<dyn Estimator>, BuildError> {
    match choice {
        EstimatorChoice::Mean(_) => Ok(Box::new(SampleMean)),
        EstimatorChoice::Median(_) => Ok(Box::new(SampleMedian)),
        EstimatorChoice::Variance(p) => {
            let ddof = to_usize(u64::from(p.ddof), "ddof")?;
            Ok(Box::new(SampleVariance::with_ddof(ddof)))
        }
        EstimatorChoice::RateFromMean(_) => Ok(Box::new(RateFromMean)),
        EstimatorChoice::RateFromMedian(_) => Ok(Box::new(RateFromMedian)),
    }
}
