use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::CurtainError;
use crate::evaluate::ApplyReport;

use super::operator::Operator;
use super::rule::{RawRule, Rule};
use super::surface::FormSurface;

/// The ordered rule list for one form.
///
/// Insertion order is preserved. Evaluation order has no semantic effect
/// except when two rules target the same group: both are applied and the
/// last mutation sticks. That last-write-wins behavior is a documented
/// limitation kept for compatibility, not a combination semantic.
///
/// A `RuleSet` is immutable once built and `Send + Sync`, so one set can be
/// shared (e.g. behind `Arc`) across any number of form instances.
///
/// Not `Deserialize`: every read path goes through
/// [`from_json`](Self::from_json) so loaded rules are always sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// Builder for constructing a [`RuleSet`].
///
/// # Example
///
/// ```
/// use curtain::RuleSetBuilder;
///
/// let rules = RuleSetBuilder::new()
///     .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
///     .rule(|r| r.show("discount").when("age").greater_than("65"))
///     .build();
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

/// Intermediate builder passed to the rule definition closure. The closure
/// must finish with one of the operator methods; a rule left without a
/// condition is dropped at build time.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    show_group: String,
    when_field: String,
    condition: Option<(Operator, String)>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize each rule and keep the valid ones, preserving order.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let rules = rules
            .into_iter()
            .filter_map(|rule| {
                let kept = rule.clone().sanitize();
                if kept.is_none() {
                    log::debug!("dropping invalid rule targeting '{}'", rule.show_group);
                }
                kept
            })
            .collect();
        Self { rules }
    }

    /// Read a persisted rule list, degrading to an empty set on anything
    /// unreadable.
    ///
    /// A parse failure or a non-array top level yields no rules; a
    /// non-object element is skipped; every surviving element is sanitized
    /// field-by-field, so the result always satisfies the rule invariant.
    #[must_use]
    pub fn from_json(json: &str) -> RuleSet {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_json_value(value),
            Err(err) => {
                log::debug!("persisted rule list is unreadable ({err}), treating as empty");
                RuleSet::new()
            }
        }
    }

    /// Same degradation rules as [`from_json`](Self::from_json), over an
    /// already-parsed JSON value.
    pub(crate) fn from_json_value(value: Value) -> RuleSet {
        let Value::Array(items) = value else {
            log::debug!("persisted rule list is not an array, treating as empty");
            return RuleSet::new();
        };

        let rules = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RawRule>(item) {
                Ok(raw) => raw.sanitize(),
                Err(err) => {
                    log::debug!("skipping unreadable rule record: {err}");
                    None
                }
            })
            .collect();
        RuleSet { rules }
    }

    /// Serialize for write-back as the persisted JSON blob.
    ///
    /// # Errors
    ///
    /// Returns [`CurtainError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, CurtainError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a rule list from a JSON file. I/O failures are reported;
    /// unreadable content degrades to an empty set like
    /// [`from_json`](Self::from_json).
    ///
    /// # Errors
    ///
    /// Returns [`CurtainError::Io`] if the file cannot be read.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<RuleSet, CurtainError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json))
    }

    /// Write the rule list to a JSON file, atomically replacing any prior
    /// content (write-to-temp then rename).
    ///
    /// # Errors
    ///
    /// Returns [`CurtainError`] on encoding or I/O failure.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), CurtainError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Re-check every rule against the surface's current field values and
    /// apply show/hide side effects. Call on form initialization and on
    /// every field change.
    pub fn apply(&self, surface: &mut dyn FormSurface) {
        crate::evaluate::apply(self, surface);
    }

    /// Like [`apply`](Self::apply), returning diagnostics about the cycle.
    pub fn apply_detailed(&self, surface: &mut dyn FormSurface) -> ApplyReport {
        crate::evaluate::apply_detailed(self, surface)
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: std::collections::BTreeSet<&str> =
            self.rules.iter().map(|r| r.show_group.as_str()).collect();
        write!(f, "RuleSet({} rules over {} groups)", self.rules.len(), groups.len())
    }
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define one rule. The closure must set the target group, the watched
    /// field, and finish with an operator method.
    #[must_use]
    pub fn rule(mut self, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder::default());
        match builder.condition {
            Some((operator, value)) => self.rules.push(Rule::new(
                builder.show_group,
                builder.when_field,
                operator,
                value,
            )),
            None => log::debug!(
                "dropping rule for '{}' with no condition",
                builder.show_group
            ),
        }
        self
    }

    /// Sanitize and finish. Invalid rules are dropped silently.
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet::from_rules(self.rules)
    }
}

impl RuleBuilder {
    /// Name the group this rule governs.
    #[must_use]
    pub fn show(mut self, group: &str) -> Self {
        self.show_group = group.to_owned();
        self
    }

    /// Name the field whose live value drives the rule.
    #[must_use]
    pub fn when(mut self, field: &str) -> Self {
        self.when_field = field.to_owned();
        self
    }

    /// Set an arbitrary condition. The operator-named finishers below are
    /// usually more readable.
    #[must_use]
    pub fn condition(mut self, operator: Operator, value: &str) -> Self {
        self.condition = Some((operator, value.to_owned()));
        self
    }

    #[must_use]
    pub fn equals(self, value: &str) -> Self {
        self.condition(Operator::Equals, value)
    }

    #[must_use]
    pub fn not_equals(self, value: &str) -> Self {
        self.condition(Operator::NotEquals, value)
    }

    #[must_use]
    pub fn contains(self, value: &str) -> Self {
        self.condition(Operator::Contains, value)
    }

    #[must_use]
    pub fn not_contains(self, value: &str) -> Self {
        self.condition(Operator::NotContains, value)
    }

    #[must_use]
    pub fn is_empty(self) -> Self {
        self.condition(Operator::IsEmpty, "")
    }

    #[must_use]
    pub fn not_empty(self) -> Self {
        self.condition(Operator::NotEmpty, "")
    }

    #[must_use]
    pub fn greater_than(self, value: &str) -> Self {
        self.condition(Operator::GreaterThan, value)
    }

    #[must_use]
    pub fn less_than(self, value: &str) -> Self {
        self.condition(Operator::LessThan, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("a").when("f").equals("1"))
            .rule(|r| r.show("b").when("f").not_empty())
            .build();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].show_group, "a");
        assert_eq!(rules.rules()[1].show_group, "b");
        assert_eq!(rules.rules()[1].operator, Operator::NotEmpty);
    }

    #[test]
    fn builder_drops_rule_without_condition() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("a").when("f"))
            .build();
        assert!(rules.is_empty());
    }

    #[test]
    fn builder_drops_unnamed_rule() {
        let rules = RuleSetBuilder::new().rule(|r| r.equals("1")).build();
        assert!(rules.is_empty());
    }

    #[test]
    fn from_json_garbage_is_empty() {
        assert!(RuleSet::from_json("not json").is_empty());
        assert!(RuleSet::from_json("{\"a\":1}").is_empty());
        assert!(RuleSet::from_json("null").is_empty());
        assert!(RuleSet::from_json("42").is_empty());
    }

    #[test]
    fn from_json_skips_bad_elements() {
        let json = r#"[
            {"show_field":"extra","if_field":"trigger","operator":"equals","if_value":"yes"},
            17,
            {"show_field":"","if_field":"trigger","operator":"equals","if_value":"yes"},
            {"show_field":"other","if_field":"trigger","operator":"bogus","if_value":"no"}
        ]"#;
        let rules = RuleSet::from_json(json);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].show_group, "extra");
        // unknown operator coerced, not dropped
        assert_eq!(rules.rules()[1].operator, Operator::Equals);
    }

    #[test]
    fn json_round_trip() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("extra").when("trigger").equals("yes"))
            .build();
        let json = rules.to_json().unwrap();
        assert_eq!(RuleSet::from_json(&json), rules);
    }

    #[test]
    fn empty_set_serializes_to_empty_array() {
        assert_eq!(RuleSet::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn display_counts_distinct_groups() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("a").when("f").equals("1"))
            .rule(|r| r.show("a").when("g").equals("2"))
            .rule(|r| r.show("b").when("f").equals("3"))
            .build();
        assert_eq!(rules.to_string(), "RuleSet(3 rules over 2 groups)");
    }
}
