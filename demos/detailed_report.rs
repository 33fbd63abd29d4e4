use curtain::{MemoryForm, RuleSetBuilder};

fn main() {
    let rules = RuleSetBuilder::new()
        .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
        .rule(|r| r.show("discount").when("age").greater_than("65"))
        .rule(|r| r.show("missing-group").when("age").not_empty())
        .build();

    let mut form = MemoryForm::new()
        .choice("need-callback", &["yes", "no"])
        .text("age", "70")
        .group("contact-extra", |g| g.text("phone", ""))
        .group("discount", |g| g.text("code", ""));

    let report = rules.apply_detailed(&mut form);
    println!("{report}");
    for (group, visible) in report.visibility() {
        println!("  {group}: {}", if *visible { "shown" } else { "hidden" });
    }
}
