//! Ports Layer
//!
//! - Inbound: `PriorityApi`, what callers drive
//! - Outbound: `StructuredObject`, what the accessor needs from an object

pub mod inbound;
pub mod outbound;

pub use inbound::PriorityApi;
pub use outbound::{AnnotationValue, Annotations, StructuredObject};
