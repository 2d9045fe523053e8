//! Profile error types.
//!
//! These errors represent precondition violations caught at the input
//! boundary. Defined here so the CLI can classify them without string
//! matching; the scoring engine itself never sees an invalid input.

use thiserror::Error;

/// Errors raised while turning a raw profile into a `UserInput`.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The name field is empty or whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// A numeric field is below zero.
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    /// The diet tag is not one of vegan/vegetarian/non-veg.
    #[error("unknown diet: {0}")]
    UnknownDiet(String),
}

impl ProfileError {
    /// The offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProfileError::EmptyName => Some("name"),
            ProfileError::NegativeValue { field, .. } => Some(field),
            ProfileError::UnknownDiet(_) => Some("diet"),
        }
    }
}
