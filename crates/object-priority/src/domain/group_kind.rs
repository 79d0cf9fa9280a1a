//! Type identity of structured objects
//!
//! A structured object is identified by its API group, version and kind.
//! Only the (group, kind) pair matters for priority decisions; the version is
//! carried along but never consulted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The core API group has an empty name.
pub const CORE_GROUP: &str = "";

/// (group, kind) pair, the version-independent identity of a type
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl GroupKind {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }

    /// True if this kind belongs to the core (unnamed) group.
    pub fn is_core(&self) -> bool {
        self.group == CORE_GROUP
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_core() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}.{}", self.kind, self.group)
        }
    }
}

/// Full type identity including the API version
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Build the identity from an `apiVersion` string and a kind.
    ///
    /// `apps/v1` splits into group `apps` and version `v1`. A value without a
    /// slash (`v1`) names a version of the core group.
    pub fn from_api_version(api_version: &str, kind: impl Into<String>) -> Self {
        let (group, version) = match api_version.rsplit_once('/') {
            Some((group, version)) => (group, version),
            None => (CORE_GROUP, api_version),
        };
        Self::new(group, version, kind)
    }

    pub fn group_kind(&self) -> GroupKind {
        GroupKind::new(self.group.clone(), self.kind.clone())
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}
