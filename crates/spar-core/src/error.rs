//! Error types for parsing user-facing tokens

use thiserror::Error;

/// Errors raised when user input cannot be mapped onto a core type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not one of the accepted stance words
    #[error("Unrecognized stance: '{0}' (expected for/pro/support or against/con/oppose)")]
    UnknownStance(String),

    /// Input does not name a rubric criterion
    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),
}
