//! Domain and tag models

use serde::{Deserialize, Serialize};

/// Name of the domain that declarations fall into when none is given
pub const DEFAULT_DOMAIN: &str = "default";

/// A named grouping of settings with enabled/read-only metadata
///
/// Domains coming from static configuration are always enabled and
/// read-only: they cannot be toggled off or edited at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainModel {
    pub name: String,

    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub read_only: bool,
}

fn default_true() -> bool {
    true
}

impl DomainModel {
    /// Create a domain with the given name and config-domain defaults
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            read_only: true,
        }
    }
}

impl Default for DomainModel {
    fn default() -> Self {
        Self::named(DEFAULT_DOMAIN)
    }
}

/// A tag attached to a setting declaration
///
/// Both the bare string shorthand and the object form normalize to this
/// shape. Duplicate tag names are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let domain = DomainModel::default();

        assert_eq!(domain.name, DEFAULT_DOMAIN);
        assert!(domain.enabled);
        assert!(domain.read_only);
    }

    #[test]
    fn test_named_domain_defaults() {
        let domain = DomainModel::named("billing");

        assert_eq!(domain.name, "billing");
        assert!(domain.enabled);
        assert!(domain.read_only);
    }

    #[test]
    fn test_domain_deserialize_partial() {
        let domain: DomainModel = serde_json::from_str(r#"{"name": "ops", "enabled": false}"#).unwrap();

        assert_eq!(domain.name, "ops");
        assert!(!domain.enabled);
        // Absent field falls back to the config-domain default
        assert!(domain.read_only);
    }

    #[test]
    fn test_tag_roundtrip() {
        let tag = Tag::new("experimental");
        let json = serde_json::to_string(&tag).unwrap();

        assert_eq!(json, r#"{"name":"experimental"}"#);
        assert_eq!(serde_json::from_str::<Tag>(&json).unwrap(), tag);
    }
}
