use thiserror::Error;

/// Errors raised at the boundary of the estimation harness.
///
/// There is nothing transient here: every variant describes a caller mistake
/// and is returned immediately.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EstimationError {
    pub(crate) fn invalid<M: Into<String>>(msg: M) -> Self {
        let msg = msg.into();
        tracing::warn!(reason = %msg, "rejected input");
        EstimationError::InvalidArgument(msg)
    }
}
