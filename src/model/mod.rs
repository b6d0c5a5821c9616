//! Canonical settings model
//!
//! This module contains the strict, immutable representation that loose
//! declaration input is normalized into:
//! - `DomainModel` / `Tag` - grouping metadata attached to a setting
//! - `ValueType` - the closed set of value kinds a setting may hold
//! - `SettingValue` - the one-field value wrapper around raw data
//! - `SettingDeclaration` - one named, typed, fully normalized setting

mod declaration;
mod domain;
mod value;

pub use declaration::SettingDeclaration;
pub use domain::{DomainModel, Tag, DEFAULT_DOMAIN};
pub use value::{SettingValue, ValueType};
