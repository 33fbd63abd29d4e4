//! Group transformer: rewrites `[group <name>]...[/group]` markers into
//! structural container markup at render time.
//!
//! This is a pure, positional text rewrite applied once per render; it never
//! evaluates conditions. The dialect does not support nested groups, so no
//! stack-based pairing is needed and behavior for nested markers is
//! unspecified.

use std::sync::LazyLock;

use regex::Regex;

/// Attribute carrying the group name on rendered containers. Surfaces use
/// it to locate a group container by name before falling back to field
/// lookup.
pub const GROUP_ATTR: &str = "data-curtain-group";

static GROUP_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    // name = first whitespace-delimited token; trailing tokens are dropped
    Regex::new(r"\[group\s+([^\]\s]+)[^\]]*\]").expect("valid group pattern")
});

/// Replace each `[group <name>]` with a container start tag addressable by
/// group name, and each `[/group]` with the container end tag. Markers that
/// carry no name are left untouched, matching the scanner's refusal to
/// produce a nameless group.
#[must_use]
pub fn transform_groups(markup: &str) -> String {
    let opened = GROUP_OPEN.replace_all(
        markup,
        format!("<div class=\"curtain-group\" {GROUP_ATTR}=\"${{1}}\">").as_str(),
    );
    opened.replace("[/group]", "</div>")
}
