use serde::Serialize;

/// A field declared in the form markup.
///
/// Descriptors are a transient view over the current markup text. They are
/// recomputed on every scan and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// The declaration keyword, e.g. `"text"`, `"checkbox"`, `"select"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A group declared in the form markup via `[group <name>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDescriptor {
    pub name: String,
}

/// The field/group universe of one form at one point in time.
///
/// Produced by a pure scan over the markup text; callers re-scan whenever
/// the markup is edited instead of mutating a snapshot. An empty snapshot is
/// valid and means "no fields or groups yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: Vec<FieldDescriptor>,
    pub groups: Vec<GroupDescriptor>,
}

impl FormSnapshot {
    /// Scan shorthand markup into a fresh snapshot.
    #[must_use]
    pub fn scan(markup: &str) -> FormSnapshot {
        crate::scan::scan(markup)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupDescriptor> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Field and group names share one namespace for lookup purposes.
    #[must_use]
    pub fn knows_name(&self, name: &str) -> bool {
        self.field(name).is_some() || self.group(name).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.is_empty()
    }
}
