//! # Object Priority
//!
//! Reads and writes the `config.kubernetes.io/priority-level` annotation on
//! structured objects, and assigns a fixed priority to kinds that must always
//! be applied before anything else.
//!
//! ## Architecture
//!
//! - **Domain**: `GroupKind`, priority encoding, the static table, errors
//! - **Ports**: Inbound (`PriorityApi`) and Outbound (`StructuredObject`)
//! - **Adapters**: `Unstructured`, a JSON-backed object
//! - **Application**: the annotation operations and `PriorityAccessor`
//!
//! ## Priority rules
//!
//! - Annotation values are base-10 digits in `0..=MAX_PRIORITY`.
//! - Namespaces and CustomResourceDefinitions get `STATIC_PRIORITY`
//!   (`MAX_PRIORITY + 1`) regardless of annotations.
//! - Reads treat a missing object or annotation as priority 0. Writes to a
//!   missing object fail.
//!
//! Ordering objects by priority is left to callers.
//!
//! ## Usage Example
//!
//! ```
//! use object_priority::{read_annotation, write_annotation, Unstructured};
//!
//! let mut cm = Unstructured::new("v1", "ConfigMap", "settings");
//! write_annotation(Some(&mut cm), 42)?;
//! assert_eq!(read_annotation(Some(&cm))?, 42);
//! # Ok::<(), object_priority::PriorityError>(())
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{ObjectError, Unstructured};
pub use application::{
    get_static_priority, has_annotation, read_annotation, resolve_priority, write_annotation,
    write_annotation_checked, PriorityAccessor,
};
pub use config::AccessorConfig;
pub use domain::{
    GroupKind, GroupVersionKind, InvalidPriority, PriorityError, PrioritySource,
    ResolvedPriority, ANNOTATION, MAX_PRIORITY, STATIC_PRIORITY,
};
pub use ports::{AnnotationValue, Annotations, PriorityApi, StructuredObject};
