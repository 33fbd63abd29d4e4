use serde_json::Value;

use super::ruleset::RuleSet;

/// The runtime handoff a host delivers to each rendered form instance:
/// `{conditions, form_id}`.
///
/// The bundle arrives before the evaluator initializes and may be absent or
/// malformed; reading it never fails. A non-array `conditions` degrades to
/// an empty set and a missing or non-scalar `form_id` to an empty string,
/// so the worst case is a form with nothing to toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionBundle {
    pub conditions: RuleSet,
    pub form_id: String,
}

impl ConditionBundle {
    #[must_use]
    pub fn new(conditions: RuleSet, form_id: impl Into<String>) -> Self {
        Self {
            conditions,
            form_id: form_id.into(),
        }
    }

    /// Lossy read of the handoff JSON.
    #[must_use]
    pub fn from_json(json: &str) -> ConditionBundle {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(json) else {
            log::debug!("condition bundle is unreadable, treating as empty");
            return ConditionBundle::default();
        };

        let conditions = match map.get("conditions") {
            Some(value) => RuleSet::from_json_value(value.clone()),
            None => RuleSet::new(),
        };
        let form_id = match map.get("form_id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        ConditionBundle {
            conditions,
            form_id,
        }
    }
}
