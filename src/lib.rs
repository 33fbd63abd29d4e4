mod error;
mod evaluate;
mod parse;
mod scan;
mod transform;
mod types;

pub use error::CurtainError;
pub use evaluate::{ApplyReport, VisibilityMap};
pub use parse::{ParseError, conditions_to_text, parse_conditions, parse_conditions_strict};
pub use scan::{scan, scan_fields, scan_groups};
pub use transform::{GROUP_ATTR, transform_groups};
pub use types::{
    ConditionBundle, FieldDescriptor, FormSnapshot, FormSurface, GroupBuilder, GroupDescriptor,
    GroupHandle, MemoryForm, Operator, Rule, RuleBuilder, RuleSet, RuleSetBuilder,
    UnknownOperator, is_condition_met,
};
