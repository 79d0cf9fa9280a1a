//! Priority annotation operations
//!
//! Stateless functions over a caller-owned object. Reads accept `None` and
//! treat it as "no priority"; writes reject it.

use crate::domain::{
    format_priority, parse_priority, static_priority, validate_priority, InvalidPriority,
    PriorityError, PrioritySource, ResolvedPriority, ANNOTATION,
};
use crate::ports::outbound::{AnnotationValue, StructuredObject};
use tracing::{debug, trace};

/// Returns true if the priority-level annotation is present, whatever its
/// value.
pub fn has_annotation<O: StructuredObject + ?Sized>(object: Option<&O>) -> bool {
    object.is_some_and(|o| o.annotation(ANNOTATION).is_some())
}

/// Reads the priority-level annotation and parses it into an unsigned int.
///
/// Returns 0 when the object or the annotation is absent. Use
/// [`has_annotation`] to tell that apart from an explicit zero.
pub fn read_annotation<O: StructuredObject + ?Sized>(
    object: Option<&O>,
) -> Result<u64, PriorityError> {
    let Some(object) = object else {
        return Ok(0);
    };
    let raw = match object.annotation(ANNOTATION) {
        None => return Ok(0),
        Some(AnnotationValue::Text(raw)) => raw,
        Some(AnnotationValue::NonString(found)) => {
            return Err(PriorityError::invalid_annotation(
                ANNOTATION,
                InvalidPriority::NotAString {
                    found: found.to_string(),
                },
            ));
        }
    };

    trace!(
        namespace = object.namespace(),
        name = object.name(),
        value = ?raw,
        "priority-level annotation found"
    );

    parse_priority(&raw)
}

/// Sets the priority-level annotation, creating the annotation map if the
/// object has none. Other annotations are left as stored. Any `u64` is
/// written as-is.
pub fn write_annotation<O: StructuredObject + ?Sized>(
    object: Option<&mut O>,
    priority: u64,
) -> Result<(), PriorityError> {
    let object = object.ok_or(PriorityError::NilObject)?;

    object.set_annotation(ANNOTATION, format_priority(priority));

    debug!(
        namespace = object.namespace(),
        name = object.name(),
        priority,
        "priority-level annotation written"
    );
    Ok(())
}

/// Like [`write_annotation`], but rejects values that a subsequent
/// [`read_annotation`] would refuse. The object is untouched on error.
pub fn write_annotation_checked<O: StructuredObject + ?Sized>(
    object: Option<&mut O>,
    priority: u64,
) -> Result<(), PriorityError> {
    let object = object.ok_or(PriorityError::NilObject)?;
    validate_priority(priority)?;
    write_annotation(Some(object), priority)
}

/// Returns the static priority for the object's kind, if it has one.
pub fn get_static_priority<O: StructuredObject + ?Sized>(object: Option<&O>) -> Option<u64> {
    let gvk = object?.group_version_kind();
    static_priority(&gvk.group_kind())
}

/// Effective priority of an object.
///
/// The static table wins over the annotation; an annotation on a static kind
/// is not parsed. A malformed annotation on any other kind is an error.
pub fn resolve_priority<O: StructuredObject + ?Sized>(
    object: Option<&O>,
) -> Result<ResolvedPriority, PriorityError> {
    if let Some(value) = get_static_priority(object) {
        return Ok(ResolvedPriority::new(value, PrioritySource::Static));
    }
    if !has_annotation(object) {
        return Ok(ResolvedPriority::default_priority());
    }
    let value = read_annotation(object)?;
    Ok(ResolvedPriority::new(value, PrioritySource::Annotation))
}
