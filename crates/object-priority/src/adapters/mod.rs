//! Adapters Layer
//!
//! Concrete object models implementing [`StructuredObject`](crate::ports::StructuredObject).

pub mod unstructured;

pub use unstructured::{ObjectError, Unstructured};
