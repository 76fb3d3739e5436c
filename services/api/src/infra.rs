use metrics_exporter_prometheus::PrometheusHandle;
use revenue_alignment::error::AppError;
use revenue_alignment::workflows::scorecard::{RuleConfig, RuleConfigError};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the rule table once at startup: the JSON file when given, else the built-in table.
pub(crate) fn load_rules(path: Option<&Path>) -> Result<RuleConfig, RuleConfigError> {
    match path {
        Some(path) => {
            let rules = RuleConfig::from_path(path)?;
            info!(path = %path.display(), "loaded scorecard rule table");
            Ok(rules)
        }
        None => Ok(RuleConfig::standard()),
    }
}

/// Read a scoring payload from disk. A bare question -> answer map is wrapped as `answers`.
pub(crate) fn read_payload(path: &Path) -> Result<Value, AppError> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(wrap_answers(value))
}

fn wrap_answers(value: Value) -> Value {
    match value {
        Value::Object(map) if map.contains_key("answers") => Value::Object(map),
        other => json!({ "answers": other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_answer_maps_are_wrapped() {
        let wrapped = wrap_answers(json!({ "Why do you most often win deals?": "Price" }));
        assert_eq!(
            wrapped["answers"]["Why do you most often win deals?"],
            "Price"
        );
    }

    #[test]
    fn full_payloads_pass_through() {
        let payload = json!({ "tier": "audit", "answers": { "Q": "A" } });
        assert_eq!(wrap_answers(payload.clone()), payload);
    }

    #[test]
    fn missing_rules_path_uses_standard_table() {
        let rules = load_rules(None).expect("standard rules");
        assert_eq!(rules, RuleConfig::standard());
    }
}
