use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type for the strict authoring-time conveniences.
///
/// The scanning and evaluation paths never fail by design (bad input
/// degrades to "no entry" or "skip"); this type surfaces only from APIs
/// like [`RuleSet::to_json()`](crate::RuleSet::to_json), the file helpers,
/// and [`parse_conditions_strict()`](crate::parse_conditions_strict).
#[derive(Debug, Error)]
pub enum CurtainError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
