use std::convert::TryFrom;

use crate::config::build::BuildError;
use crate::config::choices::{ExponentialParameters, GaussianParameters, SamplerChoice};
use crate::samplers::{ExponentialSampler, GaussianSampler, Sampler};

impl TryFrom<GaussianParameters> for GaussianSampler {
    type Error = BuildError;

    fn try_from(parameters: GaussianParameters) -> Result<Self, Self::Error> {
        GaussianSampler::new(parameters.mu, parameters.sigma, parameters.seed)
            .map_err(BuildError::from)
    }
}

impl TryFrom<ExponentialParameters> for ExponentialSampler {
    type Error = BuildError;

    fn try_from(parameters: ExponentialParameters) -> Result<Self, Self::Error> {
        ExponentialSampler::new(parameters.rate, parameters.seed).map_err(BuildError::from)
    }
}

pub fn build_sampler(choice: SamplerChoice) -> Result<Box<dyn Sampler>, BuildError> {
    match choice {
        SamplerChoice::Gaussian(p) => {
            let s = GaussianSampler::try_from(p)?;
            Ok(Box::new(s))
        }
        SamplerChoice::Exponential(p) => {
            let s = ExponentialSampler::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind() {
        let g = build_sampler(SamplerChoice::Gaussian(GaussianParameters::default())).unwrap();
        assert_eq!(g.describe(), "Gaussian(mu=0, sigma=1)");
        let e = build_sampler(SamplerChoice::Exponential(ExponentialParameters {
            rate: 2.0,
            seed: 1,
        }))
        .unwrap();
        assert_eq!(e.describe(), "Exponential(rate=2)");
    }

    #[test]
    fn invalid_parameters_surface_as_build_error() {
        let err = build_sampler(SamplerChoice::Gaussian(GaussianParameters {
            mu: 0.0,
            sigma: -1.0,
            seed: 1,
        }))
        .err()
        .unwrap();
        assert!(matches!(err, BuildError::Estimation(_)));
    }
}
