//! Priority values, their string encoding, and the static priority table
//!
//! Lower values are applied earlier by consumers. This module only validates
//! range; it never orders objects.

use super::errors::{InvalidPriority, PriorityError};
use super::group_kind::GroupKind;
use serde::{Deserialize, Serialize};

/// Annotation key holding an object's priority level.
pub const ANNOTATION: &str = "config.kubernetes.io/priority-level";

/// Largest priority an annotation may declare.
pub const MAX_PRIORITY: u64 = 1_000_000_000;

/// Priority implied by kind alone. One above [`MAX_PRIORITY`] so these kinds
/// outrank anything an annotation can declare.
pub const STATIC_PRIORITY: u64 = MAX_PRIORITY + 1;

/// Group of CustomResourceDefinition.
pub const APIEXTENSIONS_GROUP: &str = "apiextensions.k8s.io";

/// Look up the static priority for a (group, kind) pair.
pub fn static_priority(group_kind: &GroupKind) -> Option<u64> {
    match (group_kind.group.as_str(), group_kind.kind.as_str()) {
        ("", "Namespace") | (APIEXTENSIONS_GROUP, "CustomResourceDefinition") => {
            Some(STATIC_PRIORITY)
        }
        _ => None,
    }
}

/// Decode an annotation value.
///
/// Accepts only ASCII digits; the result must not exceed [`MAX_PRIORITY`].
pub fn parse_priority(raw: &str) -> Result<u64, PriorityError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriorityError::invalid_annotation(
            ANNOTATION,
            InvalidPriority::NotDecimal {
                value: raw.to_string(),
            },
        ));
    }

    let priority = raw
        .parse::<u64>()
        .map_err(|e| PriorityError::invalid_annotation(ANNOTATION, e.into()))?;

    validate_priority(priority)?;
    Ok(priority)
}

/// Reject values above [`MAX_PRIORITY`].
pub fn validate_priority(priority: u64) -> Result<(), PriorityError> {
    if priority > MAX_PRIORITY {
        return Err(PriorityError::invalid_annotation(
            ANNOTATION,
            InvalidPriority::ExceedsMaximum { max: MAX_PRIORITY },
        ));
    }
    Ok(())
}

/// Encode a priority as an annotation value.
pub fn format_priority(priority: u64) -> String {
    priority.to_string()
}

/// Where a resolved priority came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrioritySource {
    /// The object's kind is in the static table.
    Static,
    /// The object carries a valid priority annotation.
    Annotation,
    /// Neither applies; the priority is zero.
    Default,
}

/// Effective priority of a single object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPriority {
    pub value: u64,
    pub source: PrioritySource,
}

impl ResolvedPriority {
    pub fn new(value: u64, source: PrioritySource) -> Self {
        Self { value, source }
    }

    pub fn default_priority() -> Self {
        Self::new(0, PrioritySource::Default)
    }
}
