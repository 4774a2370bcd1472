use serde::{Deserialize, Serialize};

/// Named scalar metric taken from a report.
///
/// Typical examples: `"mean.rmse"`, `"unbiased_variance.mean_error"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
