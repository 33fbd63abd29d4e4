use winnow::combinator::{alt, cut_err, delimited, opt};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::{Operator, Rule};

// One rule per line:
//
//     show [contact-extra] if [need-callback] equals "yes"

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

fn bracketed<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('[', take_while(1.., |c: char| c != ']'), ']').parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Operator> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c == '_')
        .try_map(|s: &str| s.parse::<Operator>())
        .context(StrContext::Expected(StrContextValue::Description(
            "operator",
        )))
        .parse_next(input)
}

fn quoted(input: &mut &str) -> ModalResult<String> {
    alt((
        delimited('"', take_while(0.., |c: char| c != '"'), '"'),
        delimited('\'', take_while(0.., |c: char| c != '\''), '\''),
    ))
    .map(ToOwned::to_owned)
    .parse_next(input)
}

pub(super) fn rule_line(input: &mut &str) -> ModalResult<Rule> {
    ws.parse_next(input)?;
    "show".parse_next(input)?;
    ws.parse_next(input)?;
    let group = cut_err(bracketed)
        .context(StrContext::Expected(StrContextValue::Description(
            "group name",
        )))
        .parse_next(input)?;
    ws.parse_next(input)?;
    cut_err("if").parse_next(input)?;
    ws.parse_next(input)?;
    let field = cut_err(bracketed)
        .context(StrContext::Expected(StrContextValue::Description(
            "field name",
        )))
        .parse_next(input)?;
    ws.parse_next(input)?;
    let op = cut_err(operator).parse_next(input)?;
    ws.parse_next(input)?;
    let value = opt(quoted).parse_next(input)?.unwrap_or_default();

    Ok(Rule::new(group.trim(), field.trim(), op, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_conditions;

    #[test]
    fn parse_single_line() {
        let rules = parse_conditions(r#"show [contact-extra] if [need-callback] equals "yes""#);
        assert_eq!(rules.len(), 1);
        let rule = &rules.rules()[0];
        assert_eq!(rule.show_group, "contact-extra");
        assert_eq!(rule.when_field, "need-callback");
        assert_eq!(rule.operator, Operator::Equals);
        assert_eq!(rule.value, "yes");
    }

    #[test]
    fn parse_all_operator_tokens() {
        for op in Operator::ALL {
            let line = format!("show [g] if [f] {} \"v\"", op.token());
            let rules = parse_conditions(&line);
            assert_eq!(rules.rules()[0].operator, op, "failed for {op}");
        }
    }

    #[test]
    fn parse_single_quoted_value() {
        let rules = parse_conditions("show [g] if [f] equals 'yes'");
        assert_eq!(rules.rules()[0].value, "yes");
    }

    #[test]
    fn missing_value_defaults_to_empty() {
        let rules = parse_conditions("show [g] if [f] not_empty");
        assert_eq!(rules.rules()[0].operator, Operator::NotEmpty);
        assert_eq!(rules.rules()[0].value, "");
    }

    #[test]
    fn bracketed_names_are_trimmed() {
        let rules = parse_conditions(r#"show [ extra ] if [ trigger ] equals "x""#);
        assert_eq!(rules.rules()[0].show_group, "extra");
        assert_eq!(rules.rules()[0].when_field, "trigger");
    }

    #[test]
    fn unknown_operator_fails_the_line() {
        assert!(parse_conditions(r#"show [g] if [f] matches "x""#).is_empty());
    }
}
