//! # setreg - Settings Declaration Registry
//!
//! A generic, framework-agnostic Rust library for turning loose,
//! author-friendly settings declarations into a strict canonical model
//! and exposing them through priority-ordered providers.
//!
//! ## Features
//!
//! - **Declaration Normalization**: Accepts terse literal configuration
//!   (`"enable_feature_x": true`) as well as fully structured records,
//!   and canonicalizes both into the same strict shape
//! - **Multi-Source Aggregation**: Merges inline declarations with
//!   declarations from external files, skipping optional files that are
//!   absent in the current environment
//! - **Eager/Lazy Strategies**: Declarations are either kept verbatim
//!   for immediate denormalization or indexed by domain and name for
//!   denormalization on first read
//! - **Provider Registry**: A priority-ordered registration collection
//!   behind a small trait any host can implement
//! - **Build Dependencies**: Reports which source files were read so
//!   caching build steps can invalidate on change
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use setreg::{ProviderRegistry, RegistryBuilder};
//!
//! let mut registry = ProviderRegistry::new();
//!
//! RegistryBuilder::new()
//!     .declare(json!({
//!         "name": "enable_feature_x",
//!         "description": "Gates the new checkout flow",
//!         "domain": "features",
//!         "tags": ["experimental"],
//!         "type": "bool",
//!         "data": true,
//!     }))
//!     .source("config/settings.override.yaml") // skipped when absent
//!     .build_into(&mut registry)?;
//!
//! let declaration = registry.resolve("features", "enable_feature_x").unwrap();
//! assert_eq!(declaration.data.value, json!(true));
//! # Ok::<(), setreg::Error>(())
//! ```
//!
//! ## Declaration shape
//!
//! Declarations are loose records with `name` and `type` required;
//! domains and tags accept a bare-string shorthand:
//!
//! ```yaml
//! settings:
//!   - name: support_email
//!     type: string
//!     domain: support           # expands to {name, enabled, read_only}
//!     tags: [contact, "ui"]
//!     data: help@example.com    # wrapped as { value: ... }
//! ```
//!
//! Domains declared this way are always enabled and read-only: static
//! configuration cannot be toggled off or edited at runtime. The
//! normalizer never checks that `data` matches `type`; that is the
//! denormalizing consumer's concern.
//!
//! ## Eager vs lazy
//!
//! The default lazy strategy builds a two-level domain → name index and
//! defers denormalization to first read, which amortizes startup cost
//! when most declared settings are never read in a given process. With
//! `.eager()` the registration keeps the declarations verbatim for full
//! denormalization at build time.
//!
//! ```rust
//! use serde_json::json;
//! use setreg::{ProviderStrategy, RegistryBuilder};
//!
//! let output = RegistryBuilder::new()
//!     .declare(json!({"name": "n", "type": "int", "data": 1}))
//!     .eager()
//!     .priority(5)
//!     .build()?;
//!
//! assert_eq!(output.registration.strategy(), ProviderStrategy::Eager);
//! # Ok::<(), setreg::Error>(())
//! ```
//!
//! ## Precedence
//!
//! Aggregation order is precedence order: inline declarations first,
//! then each source in the order listed. Duplicate `(domain, name)`
//! pairs survive aggregation untouched and collapse to the last entry
//! wherever declarations are keyed by that pair. Across providers, the
//! registry consults registrations by descending priority, so a
//! higher-priority provider overrides lower-priority views of the same
//! domain/name space.
//!
//! ## Immutability
//!
//! The whole build phase runs once, synchronously, at configuration
//! time. Registrations and everything they contain are plain immutable
//! values afterwards; hosts supporting hot reload rebuild a fresh
//! registration and swap the reference, so readers never observe a
//! partially rebuilt index.

// Core modules
mod aggregate;
mod build;
mod error;
mod normalize;
mod provider;
mod registry;
mod source;

// Grouped modules
pub mod model;

// Re-exports from core
pub use aggregate::{aggregate, AggregatedSettings};
pub use build::{BuildOutput, RegistryBuilder};
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_all, RawDeclaration, RawDomain, RawTag};
pub use provider::{
    select, LazyIndex, ProviderPayload, ProviderRegistration, ProviderStrategy, DEFAULT_PRIORITY,
    DEFAULT_PROVIDER,
};
pub use registry::{ProviderRegistry, SettingsRegistry};
pub use source::{SettingsSource, SourceFormat};

// Re-exports from model
pub use model::{DomainModel, SettingDeclaration, SettingValue, Tag, ValueType, DEFAULT_DOMAIN};
