use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison operators available to visibility rules.
///
/// The set is closed: anything outside it fails closed (see
/// [`is_condition_met`]) or is coerced to [`Operator::Equals`] when a
/// persisted rule is sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    IsEmpty,
    NotEmpty,
    GreaterThan,
    LessThan,
}

/// Error returned when parsing an operator token outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// All operators, in the order an authoring surface lists them.
    pub const ALL: [Operator; 8] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::Contains,
        Operator::NotContains,
        Operator::IsEmpty,
        Operator::NotEmpty,
        Operator::GreaterThan,
        Operator::LessThan,
    ];

    /// The snake_case wire token, as stored in persisted rules and the text
    /// rule dialect.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::IsEmpty => "is_empty",
            Operator::NotEmpty => "not_empty",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
        }
    }

    /// Short human label for select lists.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "\u{2260}",
            Operator::Contains => "contains",
            Operator::NotContains => "does not contain",
            Operator::IsEmpty => "is empty",
            Operator::NotEmpty => "is not empty",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }

    /// Whether the operator compares against a stored operand.
    /// `is_empty` and `not_empty` ignore the rule value entirely.
    #[must_use]
    pub fn takes_operand(&self) -> bool {
        !matches!(self, Operator::IsEmpty | Operator::NotEmpty)
    }

    /// Evaluate the predicate for a resolved field value and the rule's
    /// stored value.
    ///
    /// String operators compare exactly; emptiness ignores surrounding
    /// whitespace; numeric operators require both sides to parse as f64 and
    /// are false otherwise.
    #[must_use]
    pub fn is_met(&self, field_value: &str, rule_value: &str) -> bool {
        match self {
            Operator::Equals => field_value == rule_value,
            Operator::NotEquals => field_value != rule_value,
            Operator::Contains => field_value.contains(rule_value),
            Operator::NotContains => !field_value.contains(rule_value),
            Operator::IsEmpty => field_value.trim().is_empty(),
            Operator::NotEmpty => !field_value.trim().is_empty(),
            Operator::GreaterThan => {
                numeric_pair(field_value, rule_value).is_some_and(|(f, r)| f > r)
            }
            Operator::LessThan => {
                numeric_pair(field_value, rule_value).is_some_and(|(f, r)| f < r)
            }
        }
    }
}

fn numeric_pair(a: &str, b: &str) -> Option<(f64, f64)> {
    let a = a.trim().parse().ok()?;
    let b = b.trim().parse().ok()?;
    Some((a, b))
}

/// Check a condition with a string-keyed operator.
///
/// This is the raw form used when the operator has not been through
/// sanitization: an unknown operator token evaluates to `false`, so the
/// governed group stays hidden.
#[must_use]
pub fn is_condition_met(field_value: &str, operator: &str, rule_value: &str) -> bool {
    operator
        .parse::<Operator>()
        .map(|op| op.is_met(field_value, rule_value))
        .unwrap_or(false)
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Operator::Equals),
            "not_equals" => Ok(Operator::NotEquals),
            "contains" => Ok(Operator::Contains),
            "not_contains" => Ok(Operator::NotContains),
            "is_empty" => Ok(Operator::IsEmpty),
            "not_empty" => Ok(Operator::NotEmpty),
            "greater_than" => Ok(Operator::GreaterThan),
            "less_than" => Ok(Operator::LessThan),
            other => Err(UnknownOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
