mod bundle;
mod descriptor;
mod memory;
mod operator;
mod rule;
mod ruleset;
mod surface;

pub use bundle::ConditionBundle;
pub use descriptor::{FieldDescriptor, FormSnapshot, GroupDescriptor};
pub use memory::{GroupBuilder, MemoryForm};
pub use operator::{Operator, UnknownOperator, is_condition_met};
pub use rule::Rule;
pub use ruleset::{RuleBuilder, RuleSet, RuleSetBuilder};
pub use surface::{FormSurface, GroupHandle};
