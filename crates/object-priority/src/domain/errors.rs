//! Error types for priority annotations

use std::num::ParseIntError;
use thiserror::Error;

/// Errors returned by the priority accessor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriorityError {
    /// The annotation is present but does not hold a valid priority.
    #[error("invalid {annotation:?} annotation: {cause}")]
    InvalidAnnotation {
        annotation: String,
        #[source]
        cause: InvalidPriority,
    },

    /// A write was attempted on an absent object.
    #[error("object is nil")]
    NilObject,
}

impl PriorityError {
    pub fn invalid_annotation(annotation: impl Into<String>, cause: InvalidPriority) -> Self {
        Self::InvalidAnnotation {
            annotation: annotation.into(),
            cause,
        }
    }

    pub fn is_invalid_annotation(&self) -> bool {
        matches!(self, Self::InvalidAnnotation { .. })
    }
}

/// Why a priority value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPriority {
    /// Contains something other than ASCII digits (sign, whitespace, separators).
    #[error("{value:?} is not a base-10 unsigned integer")]
    NotDecimal { value: String },

    /// Stored as something other than a string (a JSON number, say).
    #[error("expected a string value, got {found}")]
    NotAString { found: String },

    /// Empty, or does not fit in 64 bits.
    #[error("{0}")]
    Parse(#[from] ParseIntError),

    #[error("priority higher than the maximum allowed: {max}")]
    ExceedsMaximum { max: u64 },
}
