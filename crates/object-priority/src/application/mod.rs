//! Application Layer
//!
//! - `annotation`: the stateless priority operations
//! - `service`: `PriorityAccessor`, the configured `PriorityApi` implementation

pub mod annotation;
pub mod service;

pub use annotation::{
    get_static_priority, has_annotation, read_annotation, resolve_priority, write_annotation,
    write_annotation_checked,
};
pub use service::PriorityAccessor;
