use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::config::choices::ConfigChoice;

/// Empty parameter object so every variant still has a "params" field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct NoEstimatorParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct VarianceParameters {
    #[schemars(
        title = "Delta Degrees of Freedom",
        description = "Divisor is n - ddof (0 = biased, 1 = unbiased)",
        range(min = 0)
    )]
    pub ddof: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EstimatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EstimatorChoice {
    #[strum_discriminants(strum(message = "Sample Mean", detailed_message = "x̄"))]
    Mean(NoEstimatorParams),

    #[strum_discriminants(strum(
        message = "Sample Median",
        detailed_message = "Middle order statistic; robust to outliers."
    ))]
    Median(NoEstimatorParams),

    #[strum_discriminants(strum(
        message = "Sample Variance",
        detailed_message = "Sum of squared deviations over n - ddof."
    ))]
    Variance(VarianceParameters),

    #[strum_discriminants(strum(
        message = "Rate From Mean",
        detailed_message = "Exponential rate estimated as 1 / mean."
    ))]
    RateFromMean(NoEstimatorParams),

    #[strum_discriminants(strum(
        message = "Rate From Median",
        detailed_message = "Exponential rate estimated as ln 2 / median."
    ))]
    RateFromMedian(NoEstimatorParams),
}

impl EstimatorChoice {
    pub fn mean() -> Self {
        EstimatorChoice::Mean(NoEstimatorParams {})
    }

    pub fn median() -> Self {
        EstimatorChoice::Median(NoEstimatorParams {})
    }

    pub fn variance(ddof: u32) -> Self {
        EstimatorChoice::Variance(VarianceParameters { ddof })
    }

    pub fn rate_from_mean() -> Self {
        EstimatorChoice::RateFromMean(NoEstimatorParams {})
    }

    pub fn rate_from_median() -> Self {
        EstimatorChoice::RateFromMedian(NoEstimatorParams {})
    }
}

impl ConfigChoice for EstimatorChoice {
    type Kind = EstimatorKind;

    fn schema() -> Schema {
        schema_for!(EstimatorChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            EstimatorKind::Variance => {
                serde_json::to_value(VarianceParameters { ddof: 1 }).unwrap_or_default()
            }
            EstimatorKind::Mean
            | EstimatorKind::Median
            | EstimatorKind::RateFromMean
            | EstimatorKind::RateFromMedian => {
                serde_json::to_value(NoEstimatorParams::default()).unwrap_or_default()
            }
        }
    }
}
