//! Declaration normalizer
//!
//! Declarations are authored in a loose, terse shape: domains and tags
//! may be bare strings, data may be a scalar literal, and only `name`
//! and `type` are mandatory. This module canonicalizes one such record
//! into a strict [`SettingDeclaration`]:
//!
//! - `domain`: a bare string becomes `{ name, enabled: true, read_only: true }`;
//!   an absent domain materializes the default domain with the same flags.
//! - `tags`: bare strings become `{ name }`; object elements keep their name.
//! - `data`: scalars are wrapped as `{ value: scalar }`, objects with a
//!   `value` field pass through, anything else is wrapped whole.
//!
//! Validation runs after normalization: `name` and `type` must be
//! present and `type` must be a member of [`ValueType`]. The normalizer
//! never checks that the data matches the declared type; that mismatch
//! belongs to whichever consumer denormalizes the declaration into a
//! runtime object.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{DomainModel, SettingDeclaration, SettingValue, Tag, ValueType, DEFAULT_DOMAIN};

// =============================================================================
// Raw (loose) input shapes
// =============================================================================

/// One declaration as authored, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDeclaration {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub domain: Option<RawDomain>,

    #[serde(default)]
    pub tags: Vec<RawTag>,

    #[serde(default, rename = "type")]
    pub value_type: Option<String>,

    #[serde(default, alias = "value")]
    pub data: Option<Value>,
}

impl RawDeclaration {
    /// Deserialize a loose record from a JSON tree
    pub fn from_value(value: Value) -> Result<Self> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>")
            .to_string();
        serde_json::from_value(value).map_err(|e| Error::InvalidDeclaration {
            name,
            reason: e.to_string(),
        })
    }
}

/// Domain input: bare string shorthand or the full object form
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDomain {
    Shorthand(String),
    Model {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default)]
        read_only: Option<bool>,
    },
}

/// Tag input: bare string shorthand or `{ name }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTag {
    Shorthand(String),
    Model { name: String },
}

// =============================================================================
// Normalization
// =============================================================================

/// Canonicalize one loose declaration record
///
/// Fails with a validation error when `name` or `type` is absent, or
/// when `type` is not a member of the value-type enumeration. Pure
/// function over its input; the raw record is consumed.
pub fn normalize(raw: RawDeclaration) -> Result<SettingDeclaration> {
    let name = raw.name.ok_or_else(|| Error::MissingField {
        name: "<unnamed>".into(),
        field: "name",
    })?;

    let type_name = raw.value_type.ok_or_else(|| Error::MissingField {
        name: name.clone(),
        field: "type",
    })?;
    let value_type = type_name
        .parse::<ValueType>()
        .map_err(|()| Error::UnknownType {
            name: name.clone(),
            given: type_name,
        })?;

    let domain = match raw.domain {
        None => DomainModel::default(),
        Some(RawDomain::Shorthand(domain_name)) => DomainModel::named(domain_name),
        Some(RawDomain::Model {
            name,
            enabled,
            read_only,
        }) => DomainModel {
            name: name.unwrap_or_else(|| DEFAULT_DOMAIN.into()),
            enabled: enabled.unwrap_or(true),
            read_only: read_only.unwrap_or(true),
        },
    };

    let tags = raw
        .tags
        .into_iter()
        .map(|tag| match tag {
            RawTag::Shorthand(name) | RawTag::Model { name } => Tag { name },
        })
        .collect();

    // A declaration without data still normalizes; the wrapper then
    // carries a null value for the denormalizer to reject or default.
    let data = SettingValue::wrap(raw.data.unwrap_or(Value::Null));

    Ok(SettingDeclaration {
        name,
        description: raw.description,
        domain,
        tags,
        value_type,
        data,
    })
}

/// Canonicalize a sequence of loose records, preserving order
///
/// The first invalid declaration aborts the whole batch.
pub fn normalize_all<I>(raw: I) -> Result<Vec<SettingDeclaration>>
where
    I: IntoIterator<Item = RawDeclaration>,
{
    raw.into_iter().map(normalize).collect()
}

// =============================================================================
// Tests
// =============================================================================
