//! Configuration for the priority accessor

use serde::{Deserialize, Serialize};
use std::env;

/// Environment switch for [`AccessorConfig::strict_writes`].
pub const STRICT_WRITES_ENV: &str = "OBJECT_PRIORITY_STRICT_WRITES";

/// Accessor configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorConfig {
    /// Reject writes above `MAX_PRIORITY` instead of storing them verbatim.
    pub strict_writes: bool,
}

impl AccessorConfig {
    pub fn strict() -> Self {
        Self {
            strict_writes: true,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OBJECT_PRIORITY_STRICT_WRITES`: `true`/`1` to bound-check writes (default: false)
    pub fn from_env() -> Self {
        Self {
            strict_writes: env::var(STRICT_WRITES_ENV)
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

/// `true`/`1` (case-insensitive, surrounding whitespace ignored) enable a flag.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_lenient() {
        assert!(!AccessorConfig::default().strict_writes);
        assert!(AccessorConfig::strict().strict_writes);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_config_deserializes() {
        let config: AccessorConfig = serde_json::from_str(r#"{"strict_writes":true}"#).unwrap();
        assert_eq!(config, AccessorConfig::strict());
    }
}
