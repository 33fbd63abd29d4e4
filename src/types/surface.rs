/// Mutable handle over one rendered group container.
///
/// The evaluator drives the whole show/hide protocol through these three
/// primitives; implementations only translate them onto their rendering
/// surface and never decide ordering or policy themselves.
pub trait GroupHandle {
    /// Show or hide the container.
    fn set_visible(&mut self, visible: bool);

    /// Enable or disable every input element inside the container. A
    /// disabled input must never contribute to a submission.
    fn set_enabled(&mut self, enabled: bool);

    /// Reset every input element inside the container: single-value inputs
    /// to the empty string, choice inputs to unselected.
    fn clear(&mut self);
}

/// Capability interface between the evaluator and a rendered form.
///
/// The evaluator depends only on this trait, never on concrete UI
/// machinery, so the full visibility state machine can be exercised against
/// an in-memory implementation such as [`MemoryForm`](super::MemoryForm).
pub trait FormSurface {
    /// Resolve the current value of the named field.
    ///
    /// For a multi-choice field this is the value of whichever choice is
    /// selected, or the empty string if none. For single-value fields it is
    /// the raw current text/selection. Implementations should also try the
    /// array-style fallback name (`name[]`) before giving up. Returns `None`
    /// only when no such field is rendered at all.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Resolve the named group's container.
    ///
    /// Lookup is by group name first; implementations should fall back to a
    /// lone field wrapper of the same name so a rule accidentally pointing
    /// at a non-group target still toggles something sensible. Returns
    /// `None` when nothing under that name is rendered.
    fn resolve_group(&mut self, name: &str) -> Option<&mut dyn GroupHandle>;
}
