//! Manifest loading
//!
//! A manifest keeps its input shape so `set` can write back exactly what it
//! read, with only the annotations changed.

use object_priority::{ObjectError, Unstructured};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const ITEMS: &str = "items";

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item {index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ObjectError,
    },

    #[error("manifest must be a JSON object or array")]
    UnsupportedShape,
}

/// How the objects were laid out in the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestShape {
    /// A single top-level object.
    Single,
    /// A top-level JSON array of objects.
    Array,
    /// An object whose `items` field is an array of objects.
    List,
}

/// Objects loaded from one input
#[derive(Clone, Debug)]
pub struct Manifest {
    shape: ManifestShape,
    /// List envelope without `items`; only set for [`ManifestShape::List`].
    envelope: Map<String, Value>,
    objects: Vec<Unstructured>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        match value {
            Value::Array(items) => Ok(Self {
                shape: ManifestShape::Array,
                envelope: Map::new(),
                objects: objects_from(items)?,
            }),
            Value::Object(mut object) => match object.remove(ITEMS) {
                Some(Value::Array(items)) => Ok(Self {
                    shape: ManifestShape::List,
                    envelope: object,
                    objects: objects_from(items)?,
                }),
                Some(other) => {
                    // `items` that is not an array belongs to the object itself.
                    object.insert(ITEMS.to_string(), other);
                    Ok(Self::single(object))
                }
                None => Ok(Self::single(object)),
            },
            _ => Err(ManifestError::UnsupportedShape),
        }
    }

    /// Load from a file path, or standard input for `-`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let io_err = |source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        };

        let text = if path.as_os_str() == STDIN_PATH {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map_err(io_err)?;
            text
        } else {
            std::fs::read_to_string(path).map_err(io_err)?
        };

        Self::parse(&text)
    }

    fn single(object: Map<String, Value>) -> Self {
        Self {
            shape: ManifestShape::Single,
            envelope: Map::new(),
            objects: vec![Unstructured::from_map(object)],
        }
    }

    pub fn shape(&self) -> ManifestShape {
        self.shape
    }

    pub fn objects(&self) -> &[Unstructured] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Unstructured] {
        &mut self.objects
    }

    /// Rebuild the JSON in the shape it was loaded from.
    pub fn into_value(self) -> Value {
        let mut objects = self.objects.into_iter().map(Unstructured::into_value);
        match self.shape {
            ManifestShape::Single => objects.next().unwrap_or(Value::Null),
            ManifestShape::Array => Value::Array(objects.collect()),
            ManifestShape::List => {
                let mut envelope = self.envelope;
                envelope.insert(ITEMS.to_string(), Value::Array(objects.collect()));
                Value::Object(envelope)
            }
        }
    }
}

fn objects_from(items: Vec<Value>) -> Result<Vec<Unstructured>, ManifestError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Unstructured::try_from(item).map_err(|source| ManifestError::InvalidItem { index, source })
        })
        .collect()
}
