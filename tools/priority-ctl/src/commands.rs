//! get / check / set over a loaded manifest

use crate::manifest::Manifest;
use object_priority::{
    PriorityAccessor, PriorityApi, PriorityError, PrioritySource, StructuredObject, Unstructured,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{object}: {source}")]
    InvalidObject {
        object: String,
        #[source]
        source: PriorityError,
    },
}

/// Effective priority of one manifest object
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriorityReport {
    pub kind: String,
    pub namespace: String,
    pub name: String,
    pub priority: u64,
    pub source: PrioritySource,
}

impl fmt::Display for PriorityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            PrioritySource::Static => "static",
            PrioritySource::Annotation => "annotation",
            PrioritySource::Default => "default",
        };
        write!(
            f,
            "{}\t{}\t{}\t{}",
            object_ref(&self.namespace, &self.name),
            self.kind,
            self.priority,
            source
        )
    }
}

/// An object whose priority annotation failed validation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidObject {
    pub index: usize,
    pub kind: String,
    pub object: String,
    pub error: String,
}

impl fmt::Display for InvalidObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}: {}", self.index, self.kind, self.object, self.error)
    }
}

fn object_ref(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}/{name}")
    }
}

fn describe(object: &Unstructured) -> String {
    format!(
        "{} {}",
        object.group_version_kind().group_kind(),
        object_ref(object.namespace(), object.name())
    )
}

/// Resolve the priority of every object. Stops at the first invalid one.
pub fn get(
    manifest: &Manifest,
    accessor: &PriorityAccessor,
) -> Result<Vec<PriorityReport>, CommandError> {
    manifest
        .objects()
        .iter()
        .map(|object| {
            let resolved = accessor
                .resolve_priority(Some(object))
                .map_err(|source| CommandError::InvalidObject {
                    object: describe(object),
                    source,
                })?;
            Ok(PriorityReport {
                kind: object.kind().to_string(),
                namespace: object.namespace().to_string(),
                name: object.name().to_string(),
                priority: resolved.value,
                source: resolved.source,
            })
        })
        .collect()
}

/// Validate every priority annotation and collect the failures.
///
/// Static kinds are validated too: their annotation is ignored when
/// resolving, but a malformed value is still worth reporting.
pub fn check(manifest: &Manifest, accessor: &PriorityAccessor) -> Vec<InvalidObject> {
    let invalid: Vec<_> = manifest
        .objects()
        .iter()
        .enumerate()
        .filter_map(|(index, object)| {
            let err = accessor.read_annotation(Some(object)).err()?;
            Some(InvalidObject {
                index,
                kind: object.kind().to_string(),
                object: object_ref(object.namespace(), object.name()),
                error: err.to_string(),
            })
        })
        .collect();

    debug!(
        objects = manifest.objects().len(),
        invalid = invalid.len(),
        "checked priority annotations"
    );
    invalid
}

/// Write `priority` onto every object in the manifest.
///
/// With a strict accessor nothing is written unless the value is in range.
pub fn set(
    manifest: &mut Manifest,
    priority: u64,
    accessor: &PriorityAccessor,
) -> Result<(), CommandError> {
    for object in manifest.objects_mut() {
        accessor
            .write_annotation(Some(&mut *object), priority)
            .map_err(|source| CommandError::InvalidObject {
                object: describe(object),
                source,
            })?;
    }
    info!(
        objects = manifest.objects().len(),
        priority,
        strict = accessor.config().strict_writes,
        "priority-level annotation set"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_priority::{AccessorConfig, ANNOTATION, MAX_PRIORITY, STATIC_PRIORITY};
    use serde_json::json;

    fn manifest() -> Manifest {
        Manifest::from_value(json!([
            { "apiVersion": "v1", "kind": "Namespace", "metadata": { "name": "apps" } },
            {
                "apiVersion": "v1",
                "kind": "ConfigMap",
                "metadata": {
                    "name": "settings",
                    "namespace": "apps",
                    "annotations": { ANNOTATION: "10" }
                }
            },
            { "apiVersion": "apps/v1", "kind": "Deployment", "metadata": { "name": "web", "namespace": "apps" } }
        ]))
        .unwrap()
    }

    fn broken() -> Manifest {
        Manifest::from_value(json!([
            { "apiVersion": "v1", "kind": "ConfigMap", "metadata": { "name": "ok" } },
            {
                "apiVersion": "v1",
                "kind": "Secret",
                "metadata": { "name": "bad", "namespace": "apps", "annotations": { ANNOTATION: "-1" } }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_get_reports_every_object() {
        let reports = get(&manifest(), &PriorityAccessor::new()).unwrap();
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].priority, STATIC_PRIORITY);
        assert_eq!(reports[0].source, PrioritySource::Static);
        assert_eq!(reports[1].priority, 10);
        assert_eq!(reports[1].source, PrioritySource::Annotation);
        assert_eq!(reports[2].priority, 0);
        assert_eq!(reports[2].source, PrioritySource::Default);

        assert_eq!(reports[1].to_string(), "apps/settings\tConfigMap\t10\tannotation");
        assert_eq!(reports[0].to_string(), "apps\tNamespace\t1000000001\tstatic");
    }

    #[test]
    fn test_get_fails_on_invalid_annotation() {
        let err = get(&broken(), &PriorityAccessor::new()).unwrap_err();
        let CommandError::InvalidObject { object, source } = err;
        assert_eq!(object, "Secret apps/bad");
        assert!(source.is_invalid_annotation());
    }

    #[test]
    fn test_check_collects_failures() {
        let accessor = PriorityAccessor::new();
        assert!(check(&manifest(), &accessor).is_empty());

        let invalid = check(&broken(), &accessor);
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].index, 1);
        assert_eq!(invalid[0].object, "apps/bad");
        assert!(invalid[0].error.contains(ANNOTATION));
    }

    #[test]
    fn test_check_flags_non_string_priority() {
        let manifest = Manifest::from_value(json!([
            {
                "apiVersion": "v1",
                "kind": "ConfigMap",
                "metadata": { "name": "numeric", "annotations": { ANNOTATION: 5 } }
            }
        ]))
        .unwrap();
        let accessor = PriorityAccessor::new();

        let invalid = check(&manifest, &accessor);
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].object, "numeric");
        assert!(invalid[0].error.contains("expected a string value, got number"));
        assert!(get(&manifest, &accessor).is_err());
    }

    #[test]
    fn test_set_keeps_non_string_annotations() {
        let mut manifest = Manifest::from_value(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "web", "annotations": { "replicas": 3 } }
        }))
        .unwrap();
        set(&mut manifest, 1, &PriorityAccessor::new()).unwrap();

        assert_eq!(
            manifest.into_value()["metadata"]["annotations"],
            json!({ "replicas": 3, ANNOTATION: "1" })
        );
    }

    #[test]
    fn test_set_writes_every_object() {
        let accessor = PriorityAccessor::new();
        let mut manifest = manifest();
        set(&mut manifest, 3, &accessor).unwrap();

        for object in manifest.objects() {
            assert_eq!(accessor.read_annotation(Some(object)), Ok(3));
        }
        let value = manifest.into_value();
        assert_eq!(value[1]["metadata"]["annotations"][ANNOTATION], json!("3"));
    }

    #[test]
    fn test_strict_set_rejects_out_of_range() {
        let accessor = PriorityAccessor::with_config(AccessorConfig::strict());
        let mut manifest = manifest();
        assert!(set(&mut manifest, MAX_PRIORITY + 1, &accessor).is_err());
        assert_eq!(accessor.read_annotation(Some(&manifest.objects()[1])), Ok(10));
    }
}
