use curtain::{
    Operator, RuleSetBuilder, conditions_to_text, parse_conditions, parse_conditions_strict,
};

const RULE_DOC: &str = r#"
show [contact-extra] if [need-callback] equals "yes"
show [discount] if [age] greater_than "65"

show [note-block] if [comments] not_empty ""
"#;

#[test]
fn parses_a_document() {
    let rules = parse_conditions(RULE_DOC);
    assert_eq!(rules.len(), 3);
    assert_eq!(rules.rules()[0].show_group, "contact-extra");
    assert_eq!(rules.rules()[1].operator, Operator::GreaterThan);
    assert_eq!(rules.rules()[2].operator, Operator::NotEmpty);
}

#[test]
fn lossy_parse_never_fails() {
    assert!(parse_conditions("").is_empty());
    assert!(parse_conditions("complete nonsense").is_empty());

    let mixed = "show [a] if [f] equals \"1\"\nshow [broken\nshow [b] if [f] is_empty \"\"";
    let rules = parse_conditions(mixed);
    assert_eq!(rules.len(), 2);
}

#[test]
fn strict_parse_points_at_the_bad_line() {
    let text = "\nshow [a] if [f] equals \"1\"\nshow [oops] if [f] frobnicates \"x\"\n";
    let err = parse_conditions_strict(text).unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn round_trip_through_text() {
    let rules = RuleSetBuilder::new()
        .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
        .rule(|r| r.show("discount").when("age").greater_than("65"))
        .rule(|r| r.show("freeform").when("notes").contains("urgent"))
        .rule(|r| r.show("fallback").when("email").is_empty())
        .build();

    let text = conditions_to_text(&rules);
    assert_eq!(parse_conditions(&text), rules);
    assert_eq!(parse_conditions_strict(&text).unwrap(), rules);
}

#[test]
fn mixed_quote_styles() {
    let rules = parse_conditions("show [g] if [f] equals 'single'\nshow [g2] if [f] equals \"double\"");
    assert_eq!(rules.rules()[0].value, "single");
    assert_eq!(rules.rules()[1].value, "double");
}

#[test]
fn parsed_rules_are_sanitized() {
    // inner whitespace in bracketed names is trimmed before validation
    let rules = parse_conditions("show [  ] if [f] equals \"x\"");
    assert!(rules.is_empty());
}
