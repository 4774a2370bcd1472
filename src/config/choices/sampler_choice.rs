use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::config::choices::ConfigChoice;

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GaussianParameters {
    #[schemars(title = "Mean", description = "Location μ of the distribution")]
    pub mu: f64,

    #[schemars(
        title = "Standard Deviation",
        description = "Scale σ of the distribution (> 0)"
    )]
    pub sigma: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExponentialParameters {
    #[schemars(title = "Rate", description = "Rate λ (> 0); the mean is 1/λ")]
    pub rate: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for ExponentialParameters {
    fn default() -> Self {
        Self {
            rate: 1.0,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SamplerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SamplerChoice {
    #[strum_discriminants(strum(
        message = "Gaussian Sampler",
        detailed_message = "i.i.d. draws from Normal(mu, sigma)."
    ))]
    Gaussian(GaussianParameters),

    #[strum_discriminants(strum(
        message = "Exponential Sampler",
        detailed_message = "i.i.d. draws from Exponential(rate)."
    ))]
    Exponential(ExponentialParameters),
}

impl ConfigChoice for SamplerChoice {
    type Kind = SamplerKind;

    fn schema() -> Schema {
        schema_for!(SamplerChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SamplerKind::Gaussian => {
                serde_json::to_value(GaussianParameters::default()).unwrap_or_default()
            }
            SamplerKind::Exponential => {
                serde_json::to_value(ExponentialParameters::default()).unwrap_or_default()
            }
        }
    }
}
