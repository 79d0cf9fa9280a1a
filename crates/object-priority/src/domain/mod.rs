//! Domain module for object priority
//!
//! Type identity, priority encoding, the static table, and errors.
//! No I/O, no object access.

pub mod errors;
pub mod group_kind;
pub mod priority;

pub use errors::*;
pub use group_kind::*;
pub use priority::*;
