//! priority-ctl: priority-level annotation tool
//!
//! Reads JSON manifests (a single object, an array of objects, or a `List`
//! with `items`), reports each object's effective priority, validates
//! annotations, and stamps a priority onto every object.
//!
//! - `manifest`: loading and re-emitting manifests in their original shape
//! - `commands`: get / check / set over a loaded manifest
//! - `logging`: tracing subscriber setup from the environment

pub mod commands;
pub mod logging;
pub mod manifest;

pub use commands::{check, get, set, CommandError, InvalidObject, PriorityReport};
pub use logging::{init_logging, LogConfig};
pub use manifest::{Manifest, ManifestError, ManifestShape};
