//! Inbound Ports (Driving Ports / API)

use crate::domain::{PriorityError, ResolvedPriority};
use crate::ports::outbound::StructuredObject;

/// Priority accessor API
///
/// Reads tolerate an absent object and treat it as "no priority". Writes
/// reject it with [`PriorityError::NilObject`].
pub trait PriorityApi {
    /// True if the priority annotation is present.
    fn has_annotation<O: StructuredObject + ?Sized>(&self, object: Option<&O>) -> bool;

    /// Parse the priority annotation. Absent object or annotation yields 0.
    fn read_annotation<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&O>,
    ) -> Result<u64, PriorityError>;

    /// Set the priority annotation, creating the annotation map if needed.
    fn write_annotation<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&mut O>,
        priority: u64,
    ) -> Result<(), PriorityError>;

    /// Priority implied by the object's kind, if any.
    fn static_priority<O: StructuredObject + ?Sized>(&self, object: Option<&O>) -> Option<u64>;

    /// Effective priority: static table, then annotation, then zero.
    fn resolve_priority<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&O>,
    ) -> Result<ResolvedPriority, PriorityError>;
}
