use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::evaluation::{Measurement, Summary};

/// Ordered summaries from one task run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    entries: Vec<Summary>,
}

impl Report {
    pub fn push(&mut self, summary: Summary) {
        self.entries.push(summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Summary] {
        &self.entries
    }

    pub fn get(&self, estimator: &str) -> Option<&Summary> {
        self.entries.iter().find(|s| s.estimator == estimator)
    }

    /// Flattens every summary into `<estimator>.<metric>` measurements.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::with_capacity(self.entries.len() * 4);
        for s in &self.entries {
            out.push(Measurement::new(format!("{}.mean_error", s.estimator), s.mean_error));
            out.push(Measurement::new(format!("{}.rmse", s.estimator), s.rmse));
            out.push(Measurement::new(format!("{}.ci_low", s.estimator), s.interval.low));
            out.push(Measurement::new(format!("{}.ci_high", s.estimator), s.interval.high));
        }
        out
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for s in &self.entries {
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}
