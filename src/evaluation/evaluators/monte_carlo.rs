use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map;

use tracing::debug;

use crate::core::EstimateCollection;
use crate::error::EstimationError;
use crate::evaluation::{Estimator, Report};
use crate::samplers::Sampler;

/// Estimates gathered by [`evaluate`], keyed by estimator name.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    true_value: f64,
    sample_size: usize,
    iters: usize,
    collections: BTreeMap<String, EstimateCollection>,
}

impl Evaluation {
    pub fn true_value(&self) -> f64 {
        self.true_value
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn iters(&self) -> usize {
        self.iters
    }

    pub fn get(&self, estimator: &str) -> Option<&EstimateCollection> {
        self.collections.get(estimator)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, EstimateCollection> {
        self.collections.iter()
    }

    pub fn collections(&self) -> &BTreeMap<String, EstimateCollection> {
        &self.collections
    }

    pub fn into_collections(self) -> BTreeMap<String, EstimateCollection> {
        self.collections
    }

    /// One summary line per estimator, measured against the true value.
    pub fn summarize(&self, confidence: f64) -> Result<Report, EstimationError> {
        let mut report = Report::default();
        for (name, collection) in &self.collections {
            report.push(collection.summarize(name.as_str(), self.true_value, confidence)?);
        }
        Ok(report)
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = (&'a String, &'a EstimateCollection);
    type IntoIter = btree_map::Iter<'a, String, EstimateCollection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Checks that an estimator set can run on samples of size `n`: it is
/// non-empty, names are unique and every estimator accepts `n` values.
pub fn check_estimators<E: Estimator>(estimators: &[E], n: usize) -> Result<(), EstimationError> {
    if estimators.is_empty() {
        return Err(EstimationError::invalid("at least one estimator is required"));
    }
    let mut seen = BTreeSet::new();
    for e in estimators {
        if e.min_sample_size() > n {
            return Err(EstimationError::invalid(format!(
                "estimator '{}' needs samples of at least {} values, got n={n}",
                e.name(),
                e.min_sample_size()
            )));
        }
        if !seen.insert(e.name()) {
            return Err(EstimationError::invalid(format!(
                "duplicate estimator name '{}'",
                e.name()
            )));
        }
    }
    Ok(())
}

/// Runs `iters` independent trials.
///
/// Each trial draws one fresh sample of size `n` and applies every estimator
/// to that same sample, so differences between estimators are not blurred by
/// differences between samples.
///
/// # Errors
/// `InvalidArgument` when `n` or `iters` is zero, `true_value` is not finite,
/// the estimator set fails [`check_estimators`], or the sampler returns a
/// sample whose length is not `n`.
pub fn evaluate<S, E>(
    sampler: &mut S,
    estimators: &[E],
    true_value: f64,
    n: usize,
    iters: usize,
) -> Result<Evaluation, EstimationError>
where
    S: Sampler + ?Sized,
    E: Estimator,
{
    if n < 1 {
        return Err(EstimationError::invalid("sample size n must be >= 1"));
    }
    if iters < 1 {
        return Err(EstimationError::invalid("iters must be >= 1"));
    }
    if !true_value.is_finite() {
        return Err(EstimationError::invalid(format!(
            "true value must be finite, got {true_value}"
        )));
    }
    check_estimators(estimators, n)?;

    let mut collections: BTreeMap<String, EstimateCollection> = estimators
        .iter()
        .map(|e| (e.name().to_string(), EstimateCollection::with_capacity(iters)))
        .collect();

    debug!(
        sampler = %sampler.describe(),
        n,
        iters,
        estimators = estimators.len(),
        "evaluation started"
    );

    for _ in 0..iters {
        let sample = sampler.draw(n);
        if sample.len() != n {
            return Err(EstimationError::invalid(format!(
                "sampler '{}' returned {} values, expected {n}",
                sampler.describe(),
                sample.len()
            )));
        }
        for e in estimators {
            let estimate = e.estimate(&sample);
            if let Some(c) = collections.get_mut(e.name()) {
                c.push(estimate);
            }
        }
    }

    debug!(iters, "evaluation finished");

    Ok(Evaluation {
        true_value,
        sample_size: n,
        iters,
        collections,
    })
}

/// Collects `iters` estimates from a trial that produces its own data, such
/// as the event simulator.
pub fn repeat_trials<F>(iters: usize, mut trial: F) -> Result<EstimateCollection, EstimationError>
where
    F: FnMut() -> Result<f64, EstimationError>,
{
    if iters < 1 {
        return Err(EstimationError::invalid("iters must be >= 1"));
    }
    let mut out = EstimateCollection::with_capacity(iters);
    for _ in 0..iters {
        out.push(trial()?);
    }
    Ok(out)
}
