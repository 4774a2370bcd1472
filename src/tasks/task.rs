use crate::error::EstimationError;
use crate::evaluation::Report;

/// A runnable experiment producing one summary line per estimator.
pub trait Task {
    /// Short description used in logs.
    fn describe(&self) -> String;

    fn run(&mut self) -> Result<Report, EstimationError>;
}
