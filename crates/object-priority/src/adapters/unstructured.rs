//! JSON-backed structured object
//!
//! `Unstructured` holds an object in the usual Kubernetes layout without a
//! typed schema:
//!
//! ```text
//! {
//!   "apiVersion": "apps/v1",
//!   "kind": "Deployment",
//!   "metadata": { "name": ..., "namespace": ..., "annotations": { ... } },
//!   ...
//! }
//! ```
//!
//! Fields the accessor does not know about are preserved untouched.

use crate::domain::GroupVersionKind;
use crate::ports::outbound::{AnnotationValue, Annotations, StructuredObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const API_VERSION: &str = "apiVersion";
const KIND: &str = "kind";
const METADATA: &str = "metadata";
const NAME: &str = "name";
const NAMESPACE: &str = "namespace";
const ANNOTATIONS: &str = "annotations";

/// Errors building an [`Unstructured`] object
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Schema-less structured object
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unstructured {
    object: Map<String, Value>,
}

impl Unstructured {
    /// Create an object with `apiVersion`, `kind` and `metadata.name` set.
    pub fn new(api_version: &str, kind: &str, name: &str) -> Self {
        let mut metadata = Map::new();
        metadata.insert(NAME.to_string(), Value::String(name.to_string()));

        let mut object = Map::new();
        object.insert(API_VERSION.to_string(), Value::String(api_version.to_string()));
        object.insert(KIND.to_string(), Value::String(kind.to_string()));
        object.insert(METADATA.to_string(), Value::Object(metadata));
        Self { object }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.update_metadata(|metadata| {
            metadata.insert(NAMESPACE.to_string(), Value::String(namespace.to_string()));
        });
        self
    }

    pub fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.set_annotation(key, value.to_string());
        self
    }

    pub fn from_map(object: Map<String, Value>) -> Self {
        Self { object }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ObjectError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    pub fn api_version(&self) -> &str {
        self.str_field(API_VERSION)
    }

    pub fn kind(&self) -> &str {
        self.str_field(KIND)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.object
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }

    fn str_field(&self, key: &str) -> &str {
        self.object.get(key).and_then(Value::as_str).unwrap_or("")
    }

    fn metadata(&self) -> Option<&Map<String, Value>> {
        self.object.get(METADATA).and_then(Value::as_object)
    }

    fn metadata_str(&self, key: &str) -> &str {
        self.metadata()
            .and_then(|m| m.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn raw_annotations(&self) -> Option<&Map<String, Value>> {
        self.metadata()?.get(ANNOTATIONS)?.as_object()
    }

    /// Apply `f` to the metadata map, replacing a missing or non-object
    /// `metadata` field with an empty map first.
    fn update_metadata(&mut self, f: impl FnOnce(&mut Map<String, Value>)) {
        let mut metadata = match self.object.remove(METADATA) {
            Some(Value::Object(metadata)) => metadata,
            _ => Map::new(),
        };
        f(&mut metadata);
        self.object
            .insert(METADATA.to_string(), Value::Object(metadata));
    }
}

impl TryFrom<Value> for Unstructured {
    type Error = ObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(ObjectError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }
}

impl From<Unstructured> for Value {
    fn from(object: Unstructured) -> Self {
        object.into_value()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl StructuredObject for Unstructured {
    /// Non-string annotation values are skipped.
    fn annotations(&self) -> Option<Annotations> {
        let raw = self.raw_annotations()?;
        Some(
            raw.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect(),
        )
    }

    /// An empty map removes the `annotations` field entirely.
    fn set_annotations(&mut self, annotations: Annotations) {
        self.update_metadata(|metadata| {
            if annotations.is_empty() {
                metadata.remove(ANNOTATIONS);
                return;
            }
            let raw = annotations
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            metadata.insert(ANNOTATIONS.to_string(), Value::Object(raw));
        });
    }

    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::from_api_version(self.api_version(), self.kind())
    }

    fn namespace(&self) -> &str {
        self.metadata_str(NAMESPACE)
    }

    fn name(&self) -> &str {
        self.metadata_str(NAME)
    }

    fn annotation(&self, key: &str) -> Option<AnnotationValue> {
        match self.raw_annotations()?.get(key)? {
            Value::String(text) => Some(AnnotationValue::Text(text.clone())),
            other => Some(AnnotationValue::NonString(json_type_name(other))),
        }
    }

    /// Inserts into the stored map, so non-string values under other keys
    /// survive. A missing or non-object `annotations` field is replaced.
    fn set_annotation(&mut self, key: &str, value: String) {
        self.update_metadata(|metadata| {
            let annotations = metadata
                .entry(ANNOTATIONS)
                .or_insert_with(|| Value::Object(Map::new()));
            if !annotations.is_object() {
                *annotations = Value::Object(Map::new());
            }
            if let Value::Object(annotations) = annotations {
                annotations.insert(key.to_string(), Value::String(value));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_map() -> Unstructured {
        Unstructured::try_from(json!({
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": {
                "name": "settings",
                "namespace": "apps",
                "annotations": {
                    "a": "1",
                    "not-a-string": 5
                }
            },
            "data": { "key": "value" }
        }))
        .unwrap()
    }

    #[test]
    fn test_identity_accessors() {
        let obj = config_map();
        assert_eq!(obj.api_version(), "v1");
        assert_eq!(obj.kind(), "ConfigMap");
        assert_eq!(obj.name(), "settings");
        assert_eq!(obj.namespace(), "apps");
        assert_eq!(
            obj.group_version_kind(),
            GroupVersionKind::new("", "v1", "ConfigMap")
        );
    }

    #[test]
    fn test_annotations_skip_non_string_values() {
        let obj = config_map();
        let annotations = obj.annotations().unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations.get("a").map(String::as_str), Some("1"));
        assert_eq!(obj.annotation("a"), Some(AnnotationValue::Text("1".to_string())));
        assert_eq!(
            obj.annotation("not-a-string"),
            Some(AnnotationValue::NonString("number"))
        );
        assert_eq!(obj.annotation("missing"), None);
    }

    #[test]
    fn test_missing_metadata_has_no_annotations() {
        let obj = Unstructured::try_from(json!({ "kind": "Pod" })).unwrap();
        assert_eq!(obj.annotations(), None);
        assert_eq!(obj.name(), "");
        assert_eq!(obj.namespace(), "");
    }

    #[test]
    fn test_null_annotations_are_absent() {
        let obj = Unstructured::try_from(json!({
            "metadata": { "annotations": null }
        }))
        .unwrap();
        assert_eq!(obj.annotations(), None);
    }

    #[test]
    fn test_set_annotations_creates_metadata() {
        let mut obj = Unstructured::try_from(json!({ "kind": "Pod" })).unwrap();
        let mut annotations = Annotations::new();
        annotations.insert("x".to_string(), "y".to_string());
        obj.set_annotations(annotations);

        assert_eq!(
            obj.clone().into_value(),
            json!({ "kind": "Pod", "metadata": { "annotations": { "x": "y" } } })
        );
    }

    #[test]
    fn test_set_annotation_keeps_non_string_values() {
        let mut obj = Unstructured::try_from(json!({
            "kind": "Deployment",
            "metadata": { "annotations": { "replicas": 3, "owner": "a" } }
        }))
        .unwrap();
        obj.set_annotation("k", "v".to_string());

        assert_eq!(
            obj.into_value()["metadata"]["annotations"],
            json!({ "replicas": 3, "owner": "a", "k": "v" })
        );
    }

    #[test]
    fn test_set_annotation_replaces_non_object_annotations() {
        let mut obj = Unstructured::try_from(json!({
            "metadata": { "name": "x", "annotations": "junk" }
        }))
        .unwrap();
        obj.set_annotation("k", "v".to_string());
        assert_eq!(obj.annotations().unwrap().len(), 1);
        assert_eq!(obj.name(), "x");
    }

    #[test]
    fn test_set_empty_annotations_removes_field() {
        let mut obj = config_map();
        obj.set_annotations(Annotations::new());
        assert_eq!(obj.annotations(), None);
        assert_eq!(obj.name(), "settings");
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let mut obj = config_map();
        obj.set_annotations(Annotations::new());
        assert_eq!(obj.as_map()["data"], json!({ "key": "value" }));
    }

    #[test]
    fn test_builders() {
        let obj = Unstructured::new("apps/v1", "Deployment", "web")
            .with_namespace("prod")
            .with_annotation("k", "v");
        assert_eq!(obj.name(), "web");
        assert_eq!(obj.namespace(), "prod");
        assert_eq!(obj.annotation("k"), Some(AnnotationValue::Text("v".to_string())));
        assert_eq!(obj.group_version_kind().group, "apps");
    }

    #[test]
    fn test_rejects_non_object_json() {
        let err = Unstructured::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ObjectError::NotAnObject { found: "array" }));

        let err = Unstructured::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ObjectError::Json(_)));
    }

    #[test]
    fn test_serde_is_transparent() {
        let obj = config_map();
        let text = serde_json::to_string(&obj).unwrap();
        let back: Unstructured = serde_json::from_str(&text).unwrap();
        assert_eq!(back, obj);
    }
}
