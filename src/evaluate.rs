//! Rule application: recomputes every group's visibility from live field
//! values and drives the show/hide protocol on a
//! [`FormSurface`](crate::FormSurface).
//!
//! Application is whole-set, synchronous, and free of I/O: the host calls
//! it on form initialization and again on every field change. One rule's
//! inability to resolve never prevents the rest of the set from running.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::types::{FormSurface, Rule, RuleSet};

/// Final visibility decision per group name for one application cycle.
pub type VisibilityMap = BTreeMap<String, bool>;

pub(crate) fn apply(rules: &RuleSet, surface: &mut dyn FormSurface) {
    for rule in rules {
        let _ = apply_rule(rule, surface);
    }
}

pub(crate) fn apply_detailed(rules: &RuleSet, surface: &mut dyn FormSurface) -> ApplyReport {
    let started = Instant::now();
    let mut visibility = VisibilityMap::new();
    let mut skipped = 0;

    for rule in rules {
        match apply_rule(rule, surface) {
            // same-group collisions: the last applied rule wins
            Some(visible) => {
                visibility.insert(rule.show_group.clone(), visible);
            }
            None => skipped += 1,
        }
    }

    ApplyReport {
        visibility,
        skipped,
        duration: started.elapsed(),
    }
}

/// Apply one rule. Returns the visibility it asserted, or `None` when the
/// rule was skipped because its field or group is not currently rendered.
fn apply_rule(rule: &Rule, surface: &mut dyn FormSurface) -> Option<bool> {
    let Some(value) = surface.field_value(&rule.when_field) else {
        log::debug!("skipping rule: field '{}' not rendered", rule.when_field);
        return None;
    };
    let Some(group) = surface.resolve_group(&rule.show_group) else {
        log::debug!("skipping rule: group '{}' not rendered", rule.show_group);
        return None;
    };

    let visible = rule.matches(&value);
    if visible {
        // values are not restored on re-show; whatever a hide cleared
        // stays cleared
        group.set_visible(true);
        group.set_enabled(true);
    } else {
        group.set_visible(false);
        group.clear();
        group.set_enabled(false);
    }
    Some(visible)
}

/// Diagnostics for one application cycle, returned by
/// [`RuleSet::apply_detailed()`](crate::RuleSet::apply_detailed).
#[derive(Debug, Clone)]
#[must_use]
pub struct ApplyReport {
    visibility: VisibilityMap,
    skipped: usize,
    duration: Duration,
}

impl ApplyReport {
    /// The final visibility asserted per group, keyed by group name.
    /// Groups no rule could resolve are absent.
    #[must_use]
    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Visibility asserted for one group this cycle, if any rule reached it.
    #[must_use]
    pub fn group_visible(&self, name: &str) -> Option<bool> {
        self.visibility.get(name).copied()
    }

    /// Rules skipped this cycle because their field or group was missing.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Wall-clock duration of the cycle.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.visibility.values().filter(|v| **v).count();
        let hidden = self.visibility.len() - shown;
        write!(
            f,
            "{shown} shown, {hidden} hidden, {} skipped, {:?}",
            self.skipped, self.duration
        )
    }
}
