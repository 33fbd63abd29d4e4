use super::surface::{FormSurface, GroupHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Control {
    Text { value: String },
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InputState {
    name: String,
    control: Control,
    enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupState {
    name: String,
    visible: bool,
    inputs: Vec<InputState>,
}

/// An in-memory [`FormSurface`].
///
/// Models just enough of a rendered form to exercise the evaluator without
/// any real rendering surface: inputs are either free text or a choice among
/// fixed options, each input carries an enabled flag, and groups own their
/// inputs. An ungrouped input is wrapped in an implicit single-field group of
/// its own name, which is what makes the evaluator's group-name fallback
/// work here.
///
/// # Example
///
/// ```
/// use curtain::MemoryForm;
///
/// let mut form = MemoryForm::new()
///     .choice("need-callback", &["yes", "no"])
///     .group("contact-extra", |g| g.text("phone", ""));
///
/// form.select("need-callback", "yes");
/// assert_eq!(form.value_of("need-callback").as_deref(), Some("yes"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    groups: Vec<GroupState>,
}

/// Collects the inputs of one group during [`MemoryForm::group`].
#[derive(Debug, Default)]
pub struct GroupBuilder {
    inputs: Vec<InputState>,
}

impl GroupBuilder {
    /// Add a single-value text input.
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.inputs.push(InputState {
            name: name.to_owned(),
            control: Control::Text {
                value: value.to_owned(),
            },
            enabled: true,
        });
        self
    }

    /// Add a choice input (checkbox/radio/select style), initially
    /// unselected.
    #[must_use]
    pub fn choice(mut self, name: &str, options: &[&str]) -> Self {
        self.inputs.push(InputState {
            name: name.to_owned(),
            control: Control::Choice {
                options: options.iter().map(|&o| o.to_owned()).collect(),
                selected: None,
            },
            enabled: true,
        });
        self
    }
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ungrouped text input. It gets an implicit wrapper group of the
    /// same name.
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.push_wrapper(GroupBuilder::default().text(name, value));
        self
    }

    /// Add an ungrouped choice input, initially unselected.
    #[must_use]
    pub fn choice(mut self, name: &str, options: &[&str]) -> Self {
        self.push_wrapper(GroupBuilder::default().choice(name, options));
        self
    }

    /// Add a named group and populate it through the closure.
    #[must_use]
    pub fn group(mut self, name: &str, f: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        let builder = f(GroupBuilder::default());
        self.groups.push(GroupState {
            name: name.to_owned(),
            visible: true,
            inputs: builder.inputs,
        });
        self
    }

    fn push_wrapper(&mut self, builder: GroupBuilder) {
        let name = builder
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_default();
        self.groups.push(GroupState {
            name,
            visible: true,
            inputs: builder.inputs,
        });
    }

    /// Simulate the user typing into a text input. Unknown names are
    /// ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(input) = self.input_mut(name) {
            if let Control::Text { value: v } = &mut input.control {
                *v = value.to_owned();
            }
        }
    }

    /// Simulate the user picking a choice. Options outside the declared set
    /// are ignored.
    pub fn select(&mut self, name: &str, option: &str) {
        if let Some(input) = self.input_mut(name) {
            if let Control::Choice { options, selected } = &mut input.control {
                if let Some(idx) = options.iter().position(|o| o == option) {
                    *selected = Some(idx);
                }
            }
        }
    }

    /// Simulate the user clearing a choice.
    pub fn deselect(&mut self, name: &str) {
        if let Some(input) = self.input_mut(name) {
            if let Control::Choice { selected, .. } = &mut input.control {
                *selected = None;
            }
        }
    }

    /// Current value of the named input, with the same semantics as
    /// [`FormSurface::field_value`].
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<String> {
        self.field_value(name)
    }

    /// Whether the named group (or implicit wrapper) is currently shown.
    #[must_use]
    pub fn is_visible(&self, group: &str) -> Option<bool> {
        self.groups.iter().find(|g| g.name == group).map(|g| g.visible)
    }

    /// Whether the named input is currently interactive.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.input(name).map(|i| i.enabled)
    }

    /// The name/value pairs a submit would include: enabled inputs only,
    /// in declaration order. Disabled inputs never contribute, which is the
    /// whole point of the hide protocol.
    #[must_use]
    pub fn submission(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for group in &self.groups {
            for input in &group.inputs {
                if !input.enabled {
                    continue;
                }
                let value = match &input.control {
                    Control::Text { value } => value.clone(),
                    Control::Choice { options, selected } => match selected {
                        Some(idx) => options[*idx].clone(),
                        None => continue,
                    },
                };
                out.push((input.name.clone(), value));
            }
        }
        out
    }

    fn input(&self, name: &str) -> Option<&InputState> {
        let (gi, ii) = self.input_position(name)?;
        Some(&self.groups[gi].inputs[ii])
    }

    fn input_mut(&mut self, name: &str) -> Option<&mut InputState> {
        let (gi, ii) = self.input_position(name)?;
        Some(&mut self.groups[gi].inputs[ii])
    }

    /// Exact name match first, then the array-style fallback (`name[]`).
    fn input_position(&self, name: &str) -> Option<(usize, usize)> {
        let fallback = format!("{name}[]");
        Self::position(&self.groups, name).or_else(|| Self::position(&self.groups, &fallback))
    }

    fn position(groups: &[GroupState], target: &str) -> Option<(usize, usize)> {
        groups.iter().enumerate().find_map(|(gi, g)| {
            g.inputs
                .iter()
                .position(|i| i.name == target)
                .map(|ii| (gi, ii))
        })
    }
}

impl GroupHandle for GroupState {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_enabled(&mut self, enabled: bool) {
        for input in &mut self.inputs {
            input.enabled = enabled;
        }
    }

    fn clear(&mut self) {
        for input in &mut self.inputs {
            match &mut input.control {
                Control::Text { value } => value.clear(),
                Control::Choice { selected, .. } => *selected = None,
            }
        }
    }
}

impl FormSurface for MemoryForm {
    fn field_value(&self, name: &str) -> Option<String> {
        let input = self.input(name)?;
        Some(match &input.control {
            Control::Text { value } => value.clone(),
            Control::Choice { options, selected } => selected
                .map(|idx| options[idx].clone())
                .unwrap_or_default(),
        })
    }

    fn resolve_group(&mut self, name: &str) -> Option<&mut dyn GroupHandle> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .map(|g| g as &mut dyn GroupHandle)
    }
}
