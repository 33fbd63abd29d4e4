//! The text rule dialect: a human-typable line format for conditional
//! visibility rules, one rule per line.
//!
//! ```text
//! show [contact-extra] if [need-callback] equals "yes"
//! show [discount] if [age] greater_than "65"
//! ```

mod error;
mod grammar;

pub use error::ParseError;

use winnow::Parser;

use crate::types::{Rule, RuleSet};

/// Lossy parse of the text dialect.
///
/// Blank lines and lines that do not match the dialect are skipped (with a
/// debug log), in keeping with the engine's fail-silent style. The result
/// is sanitized like any other rule source.
#[must_use]
pub fn parse_conditions(text: &str) -> RuleSet {
    let mut rules = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match grammar::rule_line.parse(line) {
            Ok(rule) => rules.push(rule),
            Err(err) => log::debug!("skipping unparseable rule on line {}: {err}", idx + 1),
        }
    }
    RuleSet::from_rules(rules)
}

/// Strict parse of the text dialect, for authoring tooling that wants to
/// surface mistakes instead of swallowing them.
///
/// # Errors
///
/// Returns [`ParseError`] naming the first line that does not match the
/// dialect.
pub fn parse_conditions_strict(text: &str) -> Result<RuleSet, ParseError> {
    let mut rules = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let rule = grammar::rule_line
            .parse(line)
            .map_err(|err| ParseError::new(idx + 1, err.to_string()))?;
        rules.push(rule);
    }
    Ok(RuleSet::from_rules(rules))
}

/// Render a rule set in the text dialect, one rule per line, values always
/// double-quoted.
///
/// Round-trips through [`parse_conditions`] for any sanitized set whose
/// values contain no double quote, a limitation inherited from the dialect
/// itself.
#[must_use]
pub fn conditions_to_text(rules: &RuleSet) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(&format!(
            "show [{}] if [{}] {} \"{}\"\n",
            rule.show_group, rule.when_field, rule.operator, rule.value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operator, RuleSetBuilder};

    #[test]
    fn lossy_skips_garbage_lines() {
        let text = "\n\
            show [a] if [f] equals \"1\"\n\
            this line is prose, not a rule\n\
            show [b] if [f] not_empty \"\"\n";
        let rules = parse_conditions(text);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].show_group, "a");
        assert_eq!(rules.rules()[1].show_group, "b");
    }

    #[test]
    fn strict_reports_offending_line() {
        let text = "show [a] if [f] equals \"1\"\nnot a rule\n";
        let err = parse_conditions_strict(text).unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn strict_accepts_clean_input() {
        let rules = parse_conditions_strict("show [a] if [f] less_than \"5\"").unwrap();
        assert_eq!(rules.rules()[0].operator, Operator::LessThan);
    }

    #[test]
    fn text_round_trip() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
            .rule(|r| r.show("discount").when("age").greater_than("65"))
            .rule(|r| r.show("note").when("comment").is_empty())
            .build();

        let text = conditions_to_text(&rules);
        assert_eq!(parse_conditions(&text), rules);
    }

    #[test]
    fn to_text_shape() {
        let rules = RuleSetBuilder::new()
            .rule(|r| r.show("extra").when("trigger").equals("yes"))
            .build();
        assert_eq!(
            conditions_to_text(&rules),
            "show [extra] if [trigger] equals \"yes\"\n"
        );
    }
}
