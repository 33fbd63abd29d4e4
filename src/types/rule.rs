use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::operator::Operator;

/// One conditional visibility rule: show `show_group` while the current
/// value of `when_field` satisfies `operator` against `value`.
///
/// Rules have no identity beyond their position in a
/// [`RuleSet`](super::RuleSet). The persisted JSON shape is
/// `{show_field, if_field, operator, if_value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "show_field")]
    pub show_group: String,
    #[serde(rename = "if_field")]
    pub when_field: String,
    pub operator: Operator,
    #[serde(rename = "if_value")]
    pub value: String,
}

impl Rule {
    pub fn new(
        show_group: impl Into<String>,
        when_field: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            show_group: show_group.into(),
            when_field: when_field.into(),
            operator,
            value: value.into(),
        }
    }

    /// A rule is valid only when both the group and field names are
    /// non-empty. Invalid rules are never evaluated or persisted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.show_group.is_empty() && !self.when_field.is_empty()
    }

    /// Normalize the rule's text fields and drop it if invalid.
    ///
    /// Names and the stored value are trimmed and stripped of control
    /// characters, so persisted state always satisfies the validity
    /// invariant.
    #[must_use]
    pub fn sanitize(self) -> Option<Rule> {
        let rule = Rule {
            show_group: clean_text(&self.show_group),
            when_field: clean_text(&self.when_field),
            operator: self.operator,
            value: clean_text(&self.value),
        };
        rule.is_valid().then_some(rule)
    }

    /// Whether the rule's predicate holds for the given field value.
    #[must_use]
    pub fn matches(&self, field_value: &str) -> bool {
        self.operator.is_met(field_value, &self.value)
    }
}

/// Untrusted shape of one persisted record. Every field defaults to JSON
/// null so partially-formed records still sanitize instead of failing the
/// whole document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRule {
    #[serde(default)]
    show_field: Value,
    #[serde(default)]
    if_field: Value,
    #[serde(default)]
    operator: Value,
    #[serde(default)]
    if_value: Value,
}

impl RawRule {
    /// Field-by-field sanitization: scalars are coerced to text, the
    /// operator is restricted to the closed set (unknown tokens become
    /// `equals`), and the result is dropped if still invalid.
    pub(crate) fn sanitize(self) -> Option<Rule> {
        Rule {
            show_group: scalar_text(&self.show_field),
            when_field: scalar_text(&self.if_field),
            operator: scalar_text(&self.operator)
                .parse()
                .unwrap_or(Operator::Equals),
            value: scalar_text(&self.if_value),
        }
        .sanitize()
    }
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn clean_text(s: &str) -> String {
    s.trim().chars().filter(|c| !c.is_control()).collect()
}
