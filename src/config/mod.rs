//! Serializable experiment configuration.
//!
//! Choices are serde tagged enums (`{"type": ..., "params": ...}`) with a
//! JSON Schema; builders turn them into runnable [`Task`]s.

pub mod build;
pub mod choices;
pub mod presets;

use anyhow::{Context, Result};

pub use build::{BuildError, build_estimator, build_sampler, build_task};
pub use choices::{ConfigChoice, EstimatorChoice, SamplerChoice, TaskChoice};

use crate::tasks::Task;

/// Parses a JSON task description.
pub fn parse_task(json: &str) -> Result<TaskChoice> {
    serde_json::from_str(json).context("failed to parse task configuration")
}

/// Parses and builds a task in one step.
pub fn load_task(json: &str) -> Result<Box<dyn Task>> {
    let choice = parse_task(json)?;
    let task = build_task(choice).context("failed to build task")?;
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::choices::{EstimatorKind, SamplerKind, TaskKind};
    use serde_json::json;

    #[test]
    fn parses_estimation_task_with_defaults() {
        let doc = json!({
            "type": "estimation",
            "params": {
                "sampler": { "type": "gaussian", "params": { "mu": 0.0, "sigma": 1.0 } },
                "estimators": [
                    { "type": "mean", "params": {} },
                    { "type": "variance", "params": { "ddof": 1 } }
                ],
                "true_value": 0.0,
                "sample_size": 7
            }
        });
        let choice = parse_task(&doc.to_string()).unwrap();
        let TaskChoice::Estimation(p) = choice else {
            panic!("expected estimation task");
        };
        assert_eq!(p.iters, 1000);
        assert_eq!(p.confidence, 0.9);
        assert_eq!(p.estimators[1], EstimatorChoice::variance(1));
        let SamplerChoice::Gaussian(g) = p.sampler else {
            panic!("expected gaussian sampler");
        };
        assert_eq!(g.seed, 42);
    }

    #[test]
    fn presets_round_trip_through_json() {
        for (key, choice) in presets::all() {
            let text = serde_json::to_string(&choice).unwrap();
            assert_eq!(parse_task(&text).unwrap(), choice, "{key}");
        }
    }

    #[test]
    fn load_task_runs() {
        let doc = r#"{"type":"rate-simulation","params":{"rate":3.0,"iters":200}}"#;
        let mut task = load_task(doc).unwrap();
        let report = task.run().unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn load_task_reports_bad_input() {
        assert!(load_task("not json").is_err());
        let bad_rate = r#"{"type":"rate-simulation","params":{"rate":0.0}}"#;
        let err = load_task(bad_rate).err().unwrap();
        assert!(err.to_string().contains("failed to build task"));
    }

    #[test]
    fn load_task_rejects_estimators_that_cannot_run() {
        let too_small = json!({
            "type": "estimation",
            "params": {
                "sampler": { "type": "gaussian", "params": { "mu": 0.0, "sigma": 1.0 } },
                "estimators": [ { "type": "variance", "params": { "ddof": 1 } } ],
                "true_value": 1.0,
                "sample_size": 1
            }
        });
        let err = load_task(&too_small.to_string()).err().unwrap();
        assert!(err.to_string().contains("failed to build task"));
        let cause = err.downcast_ref::<BuildError>().unwrap();
        assert!(matches!(cause, BuildError::Estimation(_)));

        let duplicated = json!({
            "type": "estimation",
            "params": {
                "sampler": { "type": "gaussian", "params": { "mu": 0.0, "sigma": 1.0 } },
                "estimators": [
                    { "type": "variance", "params": { "ddof": 1 } },
                    { "type": "variance", "params": { "ddof": 1 } }
                ],
                "true_value": 1.0,
                "sample_size": 7
            }
        });
        assert!(load_task(&duplicated.to_string()).is_err());
    }

    #[test]
    fn defaults_exist_for_every_kind() {
        for (key, _) in SamplerChoice::catalog() {
            let kind: SamplerKind = key.parse().unwrap();
            assert!(build_sampler(SamplerChoice::with_defaults(kind).unwrap()).is_ok());
        }
        for (key, _) in EstimatorChoice::catalog() {
            let kind: EstimatorKind = key.parse().unwrap();
            assert!(build_estimator(EstimatorChoice::with_defaults(kind).unwrap()).is_ok());
        }
        for (key, _) in TaskChoice::catalog() {
            let kind: TaskKind = key.parse().unwrap();
            assert!(build_task(TaskChoice::with_defaults(kind).unwrap()).is_ok());
        }
    }

    #[test]
    fn catalog_uses_kebab_keys_and_messages() {
        let c = TaskChoice::catalog();
        assert_eq!(
            c,
            vec![
                ("estimation", "Evaluate Estimators"),
                ("rate-simulation", "Simulate Event Rate")
            ]
        );
    }

    fn confidence_properties<'a>(v: &'a serde_json::Value, out: &mut Vec<&'a serde_json::Value>) {
        match v {
            serde_json::Value::Object(m) => {
                if let Some(c) = m.get("properties").and_then(|p| p.get("confidence")) {
                    out.push(c);
                }
                for child in m.values() {
                    confidence_properties(child, out);
                }
            }
            serde_json::Value::Array(items) => {
                for child in items {
                    confidence_properties(child, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn schema_confidence_bounds_are_exclusive() {
        let schema = serde_json::to_value(TaskChoice::schema()).unwrap();
        let mut found = Vec::new();
        confidence_properties(&schema, &mut found);
        assert_eq!(found.len(), 2);
        for c in found {
            assert_eq!(c["exclusiveMinimum"].as_f64(), Some(0.0));
            assert_eq!(c["exclusiveMaximum"].as_f64(), Some(1.0));
            assert!(c.get("minimum").is_none() && c.get("maximum").is_none());
        }

        for confidence in [0.0, 1.0] {
            let doc = json!({
                "type": "rate-simulation",
                "params": { "rate": 3.0, "iters": 10, "confidence": confidence }
            });
            assert!(load_task(&doc.to_string()).is_err(), "{confidence}");
        }
    }

    #[test]
    fn schema_lists_variants() {
        let schema = serde_json::to_value(TaskChoice::schema()).unwrap();
        let text = schema.to_string();
        assert!(text.contains("rate-simulation"));
        assert!(text.contains("estimation"));
    }
}
