//! Outbound Ports (Driven Ports / SPI)
//!
//! The accessor treats objects as opaque apart from their annotations and
//! type identity. Any object model can be plugged in by implementing
//! [`StructuredObject`].

use crate::domain::GroupVersionKind;
use std::collections::BTreeMap;

/// Annotation map: string keys to string values
pub type Annotations = BTreeMap<String, String>;

/// Raw value stored under a single annotation key
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnnotationValue {
    Text(String),
    /// Present but not a string (a JSON number, say); holds the type name.
    NonString(&'static str),
}

/// Structured object carrying annotation-style metadata
pub trait StructuredObject {
    /// Copy of the annotation map, or `None` if the object has none.
    fn annotations(&self) -> Option<Annotations>;

    /// Replace the annotation map.
    fn set_annotations(&mut self, annotations: Annotations);

    fn group_version_kind(&self) -> GroupVersionKind;

    fn namespace(&self) -> &str;

    fn name(&self) -> &str;

    /// Single annotation lookup.
    ///
    /// Implementations that can hold non-string values must override this so
    /// such a key is reported as present rather than missing.
    fn annotation(&self, key: &str) -> Option<AnnotationValue> {
        self.annotations()?.remove(key).map(AnnotationValue::Text)
    }

    /// Set one annotation, leaving every other key as stored.
    fn set_annotation(&mut self, key: &str, value: String) {
        let mut annotations = self.annotations().unwrap_or_default();
        annotations.insert(key.to_string(), value);
        self.set_annotations(annotations);
    }
}
