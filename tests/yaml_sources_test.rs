//! YAML Source Integration Tests
//!
//! Exercises the full pipeline over YAML settings files, the format the
//! shorthand syntax is most commonly authored in.

mod common;

use common::SourceFixture;
use serde_json::json;
use setreg::{RegistryBuilder, ValueType};

#[test]
fn test_yaml_source_with_shorthand_forms() {
    let fixture = SourceFixture::new();
    let path = fixture.raw_file(
        "settings.yaml",
        r#"
settings:
  - name: enable_feature_x
    domain: features
    tags: [experimental]
    type: bool
    data: true
  - name: support_email
    description: Address shown in the footer
    domain:
      name: support
    type: string
    data: help@example.com
"#,
    );

    let output = RegistryBuilder::new().source(&path).build().unwrap();

    assert_eq!(output.registration.len(), 2);
    assert_eq!(output.resolved_sources, vec![path]);

    let feature = output.registration.get("features", "enable_feature_x").unwrap();
    assert_eq!(feature.value_type, ValueType::Bool);
    assert_eq!(feature.data.value, json!(true));
    assert!(feature.domain.read_only);

    let email = output.registration.get("support", "support_email").unwrap();
    assert_eq!(email.data.value, json!("help@example.com"));
    assert_eq!(email.description.as_deref(), Some("Address shown in the footer"));
}

#[test]
fn test_yaml_structured_value_wrapper() {
    let fixture = SourceFixture::new();
    let path = fixture.raw_file(
        "settings.yml",
        r#"
settings:
  - name: retry_policy
    type: array
    data:
      value: [1, 2, 5]
      unit: seconds
"#,
    );

    let output = RegistryBuilder::new().source(&path).build().unwrap();

    let decl = output.registration.get("default", "retry_policy").unwrap();
    assert_eq!(decl.data.value, json!([1, 2, 5]));
    assert_eq!(decl.data.extra.get("unit"), Some(&json!("seconds")));
}

#[test]
fn test_malformed_yaml_is_fatal() {
    let fixture = SourceFixture::new();
    let path = fixture.raw_file("broken.yaml", "settings: [unclosed");

    let err = RegistryBuilder::new().source(&path).build().unwrap_err();

    assert!(err.is_source_error());
}
