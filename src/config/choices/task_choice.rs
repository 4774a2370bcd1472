use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::config::choices::{
    ConfigChoice, EstimatorChoice, GaussianParameters, SamplerChoice, default_seed,
};

pub(crate) const DEFAULT_CONFIDENCE: f64 = 0.9;
fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

fn default_iters() -> u64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EstimationParams {
    pub sampler: SamplerChoice,

    pub estimators: Vec<EstimatorChoice>,

    #[schemars(
        title = "True Value",
        description = "Ground-truth parameter the estimators target"
    )]
    pub true_value: f64,

    #[schemars(
        title = "Sample Size",
        description = "Values drawn per trial",
        range(min = 1)
    )]
    pub sample_size: u64,

    #[serde(default = "default_iters")]
    #[schemars(
        title = "Iterations",
        description = "Number of independent trials",
        range(min = 1),
        default = "default_iters"
    )]
    pub iters: u64,

    #[serde(default = "default_confidence")]
    #[schemars(
        title = "Confidence",
        description = "Coverage of the empirical interval, strictly between 0.0 and 1.0",
        extend("exclusiveMinimum" = 0.0, "exclusiveMaximum" = 1.0),
        default = "default_confidence"
    )]
    pub confidence: f64,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            sampler: SamplerChoice::Gaussian(GaussianParameters::default()),
            estimators: vec![EstimatorChoice::mean(), EstimatorChoice::median()],
            true_value: 0.0,
            sample_size: 7,
            iters: default_iters(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateSimulationParams {
    #[schemars(title = "Rate", description = "True events per unit interval (> 0)")]
    pub rate: f64,

    #[serde(default = "default_iters")]
    #[schemars(
        title = "Iterations",
        description = "Number of simulated intervals",
        range(min = 1),
        default = "default_iters"
    )]
    pub iters: u64,

    #[serde(default = "default_confidence")]
    #[schemars(
        title = "Confidence",
        description = "Coverage of the empirical interval, strictly between 0.0 and 1.0",
        extend("exclusiveMinimum" = 0.0, "exclusiveMaximum" = 1.0),
        default = "default_confidence"
    )]
    pub confidence: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for RateSimulationParams {
    fn default() -> Self {
        Self {
            rate: 2.0,
            iters: default_iters(),
            confidence: DEFAULT_CONFIDENCE,
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Evaluate Estimators",
        detailed_message = "Draw repeated samples and compare estimators by bias and RMSE."
    ))]
    Estimation(EstimationParams),

    #[strum_discriminants(strum(
        message = "Simulate Event Rate",
        detailed_message = "Count exponential arrivals in a unit interval as a rate estimate."
    ))]
    RateSimulation(RateSimulationParams),
}

impl ConfigChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::Estimation => {
                serde_json::to_value(EstimationParams::default()).unwrap_or_default()
            }
            TaskKind::RateSimulation => {
                serde_json::to_value(RateSimulationParams::default()).unwrap_or_default()
            }
        }
    }
}
