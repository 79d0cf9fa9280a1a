//! Priority Accessor Service
//!
//! Main service implementing `PriorityApi`. Reads delegate straight to the
//! annotation functions; writes pick the checked or unchecked path from
//! configuration.

use crate::application::annotation;
use crate::config::AccessorConfig;
use crate::domain::{PriorityError, ResolvedPriority};
use crate::ports::inbound::PriorityApi;
use crate::ports::outbound::StructuredObject;

/// Priority accessor
#[derive(Clone, Debug, Default)]
pub struct PriorityAccessor {
    config: AccessorConfig,
}

impl PriorityAccessor {
    /// Create a new accessor with default (lenient) config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new accessor with custom config
    pub fn with_config(config: AccessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }
}

impl PriorityApi for PriorityAccessor {
    fn has_annotation<O: StructuredObject + ?Sized>(&self, object: Option<&O>) -> bool {
        annotation::has_annotation(object)
    }

    fn read_annotation<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&O>,
    ) -> Result<u64, PriorityError> {
        annotation::read_annotation(object)
    }

    fn write_annotation<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&mut O>,
        priority: u64,
    ) -> Result<(), PriorityError> {
        if self.config.strict_writes {
            annotation::write_annotation_checked(object, priority)
        } else {
            annotation::write_annotation(object, priority)
        }
    }

    fn static_priority<O: StructuredObject + ?Sized>(&self, object: Option<&O>) -> Option<u64> {
        annotation::get_static_priority(object)
    }

    fn resolve_priority<O: StructuredObject + ?Sized>(
        &self,
        object: Option<&O>,
    ) -> Result<ResolvedPriority, PriorityError> {
        annotation::resolve_priority(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MAX_PRIORITY, STATIC_PRIORITY};
    use crate::ports::outbound::mocks::MockObject;

    #[test]
    fn test_lenient_accessor_stores_any_value() {
        let accessor = PriorityAccessor::new();
        let mut obj = MockObject::new("", "ConfigMap");
        accessor
            .write_annotation(Some(&mut obj), u64::MAX)
            .unwrap();
        assert!(accessor.has_annotation(Some(&obj)));
        assert!(accessor.read_annotation(Some(&obj)).is_err());
    }

    #[test]
    fn test_strict_accessor_bounds_writes() {
        let accessor = PriorityAccessor::with_config(AccessorConfig::strict());
        let mut obj = MockObject::new("", "ConfigMap");

        let err = accessor
            .write_annotation(Some(&mut obj), MAX_PRIORITY + 1)
            .unwrap_err();
        assert!(err.is_invalid_annotation());
        assert!(!accessor.has_annotation(Some(&obj)));

        accessor.write_annotation(Some(&mut obj), 10).unwrap();
        assert_eq!(accessor.read_annotation(Some(&obj)), Ok(10));
    }

    #[test]
    fn test_accessor_static_priority() {
        let accessor = PriorityAccessor::new();
        let ns = MockObject::new("", "Namespace");
        assert_eq!(accessor.static_priority(Some(&ns)), Some(STATIC_PRIORITY));
        assert_eq!(accessor.static_priority::<MockObject>(None), None);
        assert_eq!(
            accessor.resolve_priority(Some(&ns)).unwrap().value,
            STATIC_PRIORITY
        );
    }

    #[test]
    fn test_nil_write_fails_in_both_modes() {
        for accessor in [
            PriorityAccessor::new(),
            PriorityAccessor::with_config(AccessorConfig::strict()),
        ] {
            assert_eq!(
                accessor.write_annotation::<MockObject>(None, 1),
                Err(PriorityError::NilObject)
            );
        }
    }
}
