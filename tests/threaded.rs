use std::sync::Arc;
use std::thread;

use curtain::{MemoryForm, RuleSetBuilder};

#[test]
fn one_ruleset_shared_across_form_instances() {
    let rules = Arc::new(
        RuleSetBuilder::new()
            .rule(|r| r.show("contact-extra").when("need-callback").equals("yes"))
            .build(),
    );

    let mut handles = vec![];
    for selection in ["yes", "no"] {
        let rules = Arc::clone(&rules);
        handles.push(thread::spawn(move || {
            let mut form = MemoryForm::new()
                .choice("need-callback", &["yes", "no"])
                .group("contact-extra", |g| g.text("phone", ""));
            form.select("need-callback", selection);
            rules.apply(&mut form);
            form.is_visible("contact-extra").unwrap()
        }));
    }

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [true, false]);
}
