use curtain::{conditions_to_text, parse_conditions};

fn main() {
    let text = r#"
show [contact-extra] if [need-callback] equals "yes"
show [discount] if [age] greater_than "65"
this line is ignored, the dialect is lossy
show [note-block] if [comments] not_empty ""
"#;

    let rules = parse_conditions(text);
    println!("{rules}");
    print!("{}", conditions_to_text(&rules));
}
