use curtain::{MemoryForm, RuleSetBuilder};

fn main() {
    // One rule: reveal the callback details once the user opts in
    let rules = RuleSetBuilder::new()
        .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
        .build();

    let mut form = MemoryForm::new()
        .choice("need-callback", &["yes", "no"])
        .group("contact-extra", |g| g.text("phone", ""));

    rules.apply(&mut form);
    println!(
        "initial: contact-extra visible = {:?}",
        form.is_visible("contact-extra")
    );

    form.select("need-callback", "yes");
    rules.apply(&mut form);
    println!(
        "after opting in: contact-extra visible = {:?}",
        form.is_visible("contact-extra")
    );

    form.set_value("phone", "555-0000");
    println!("submission: {:?}", form.submission());
}
