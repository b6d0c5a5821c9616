//! The canonical setting declaration

use serde::{Deserialize, Serialize};

use super::{DomainModel, SettingValue, Tag, ValueType};

/// One named, typed setting after normalization
///
/// Created once while the configuration is processed and never mutated
/// afterwards; hosts that support hot reload rebuild the whole set and
/// swap it atomically instead of editing declarations in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDeclaration {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub domain: DomainModel,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    #[serde(rename = "type")]
    pub value_type: ValueType,

    pub data: SettingValue,
}

impl SettingDeclaration {
    /// Check whether the declaration carries the given tag
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn declaration() -> SettingDeclaration {
        SettingDeclaration {
            name: "enable_feature_x".into(),
            description: None,
            domain: DomainModel::named("features"),
            tags: vec![Tag::new("experimental"), Tag::new("ui")],
            value_type: ValueType::Bool,
            data: SettingValue::new(true),
        }
    }

    #[test]
    fn test_has_tag() {
        let decl = declaration();

        assert!(decl.has_tag("experimental"));
        assert!(!decl.has_tag("billing"));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(declaration()).unwrap();

        assert_eq!(value["type"], json!("bool"));
        assert_eq!(value["domain"]["name"], json!("features"));
        assert_eq!(value["data"], json!({"value": true}));
        assert!(value.get("description").is_none());
    }
}
