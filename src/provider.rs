//! Provider strategy selection
//!
//! The aggregated declarations feed exactly one provider registration.
//! The strategy decides when declarations are denormalized into runtime
//! settings objects:
//!
//! - **Eager**: the registration holds the declarations verbatim, in
//!   aggregation order, and the consumer denormalizes all of them at
//!   build time.
//! - **Lazy** (default): the registration holds a two-level
//!   domain → name index and declarations are denormalized on first
//!   read, amortizing startup cost when most declared settings are
//!   never read in a given process.
//!
//! Either way the registration carries a provider id and a priority for
//! the downstream registry to merge several providers deterministically.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{DomainModel, SettingDeclaration};

/// Provider id used for declarations coming from configuration
pub const DEFAULT_PROVIDER: &str = "config";

/// Default priority for the configuration provider
pub const DEFAULT_PRIORITY: i32 = -10;

// =============================================================================
// Strategy
// =============================================================================

/// When declarations are denormalized into runtime objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStrategy {
    Eager,
    Lazy,
}

// =============================================================================
// Lazy Index
// =============================================================================

/// Two-level domain → name lookup over a declaration set
///
/// Built once, read-only afterwards. Duplicate keys collapse to the
/// last-seen entry, so aggregation order is precedence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LazyIndex {
    domains: HashMap<String, DomainModel>,
    settings: HashMap<String, HashMap<String, SettingDeclaration>>,
}

impl LazyIndex {
    /// Index a declaration sequence, later entries overwriting earlier
    /// ones on both the domain key and the `(domain, name)` key
    #[must_use]
    pub fn build(declarations: impl IntoIterator<Item = SettingDeclaration>) -> Self {
        let mut index = LazyIndex::default();
        for declaration in declarations {
            index
                .domains
                .insert(declaration.domain.name.clone(), declaration.domain.clone());
            index
                .settings
                .entry(declaration.domain.name.clone())
                .or_default()
                .insert(declaration.name.clone(), declaration);
        }
        index
    }

    /// Domain metadata by name
    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&DomainModel> {
        self.domains.get(name)
    }

    /// All indexed domains
    pub fn domains(&self) -> impl Iterator<Item = &DomainModel> {
        self.domains.values()
    }

    /// One declaration by domain and name
    #[must_use]
    pub fn get(&self, domain: &str, name: &str) -> Option<&SettingDeclaration> {
        self.settings.get(domain).and_then(|by_name| by_name.get(name))
    }

    /// All declarations within a domain
    pub fn domain_settings(&self, domain: &str) -> impl Iterator<Item = &SettingDeclaration> {
        self.settings.get(domain).into_iter().flat_map(HashMap::values)
    }

    /// Number of distinct domains
    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Number of distinct `(domain, name)` pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Strategy-specific payload of a provider registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProviderPayload {
    /// Declarations verbatim, in aggregation order
    Eager(Vec<SettingDeclaration>),
    /// Prebuilt domain → name lookup
    Lazy(LazyIndex),
}

/// The record describing how one declaration set is exposed to the
/// priority-ordered multi-provider routing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRegistration {
    provider_id: String,
    priority: i32,
    payload: ProviderPayload,
}

impl ProviderRegistration {
    pub fn new(provider_id: impl Into<String>, priority: i32, payload: ProviderPayload) -> Self {
        Self {
            provider_id: provider_id.into(),
            priority,
            payload,
        }
    }

    /// Identifier of the provider implementation this set feeds
    #[must_use]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Rename the registration, for hosts wiring several declaration sets
    #[must_use]
    pub fn with_provider_id(mut self, id: impl Into<String>) -> Self {
        self.provider_id = id.into();
        self
    }

    /// Registry ordering weight; higher priority wins
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    #[must_use]
    pub fn strategy(&self) -> ProviderStrategy {
        match self.payload {
            ProviderPayload::Eager(_) => ProviderStrategy::Eager,
            ProviderPayload::Lazy(_) => ProviderStrategy::Lazy,
        }
    }

    #[must_use]
    pub fn payload(&self) -> &ProviderPayload {
        &self.payload
    }

    /// Look up one declaration by domain and name
    ///
    /// Lazy registrations answer from the index; eager registrations
    /// scan the list and return the last match, so both strategies
    /// agree on precedence for the same declaration sequence.
    #[must_use]
    pub fn get(&self, domain: &str, name: &str) -> Option<&SettingDeclaration> {
        match &self.payload {
            ProviderPayload::Eager(declarations) => declarations
                .iter()
                .rev()
                .find(|d| d.domain.name == domain && d.name == name),
            ProviderPayload::Lazy(index) => index.get(domain, name),
        }
    }

    /// Look up domain metadata by name, last definition winning
    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&DomainModel> {
        match &self.payload {
            ProviderPayload::Eager(declarations) => declarations
                .iter()
                .rev()
                .find(|d| d.domain.name == name)
                .map(|d| &d.domain),
            ProviderPayload::Lazy(index) => index.domain(name),
        }
    }

    /// Number of declarations behind this registration
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.payload {
            ProviderPayload::Eager(declarations) => declarations.len(),
            ProviderPayload::Lazy(index) => index.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Build the registration for the configuration provider
///
/// `lazy = false` keeps the declarations verbatim for immediate
/// denormalization; `lazy = true` indexes them by domain and name for
/// denormalization on first read. One-shot build-time computation; the
/// returned registration is immutable.
#[must_use]
pub fn select(declarations: Vec<SettingDeclaration>, lazy: bool, priority: i32) -> ProviderRegistration {
    let payload = if lazy {
        ProviderPayload::Lazy(LazyIndex::build(declarations))
    } else {
        ProviderPayload::Eager(declarations)
    };

    let registration = ProviderRegistration::new(DEFAULT_PROVIDER, priority, payload);
    debug!(
        "selected {:?} strategy for provider '{}' ({} declaration(s), priority {})",
        registration.strategy(),
        registration.provider_id(),
        registration.len(),
        priority
    );
    registration
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SettingValue, Tag, ValueType};
    use serde_json::json;

    fn decl(domain: &str, name: &str, value: i64) -> SettingDeclaration {
        SettingDeclaration {
            name: name.into(),
            description: None,
            domain: DomainModel::named(domain),
            tags: vec![Tag::new("test")],
            value_type: ValueType::Int,
            data: SettingValue::new(value),
        }
    }

    #[test]
    fn test_eager_keeps_order_and_duplicates() {
        let registration = select(vec![decl("d", "x", 1), decl("d", "x", 2)], false, 5);

        assert_eq!(registration.strategy(), ProviderStrategy::Eager);
        assert_eq!(registration.priority(), 5);
        assert_eq!(registration.provider_id(), DEFAULT_PROVIDER);

        let ProviderPayload::Eager(list) = registration.payload() else {
            panic!("expected eager payload");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].data.value, json!(1));
        assert_eq!(list[1].data.value, json!(2));
    }

    #[test]
    fn test_lazy_last_write_wins() {
        let registration = select(vec![decl("d", "x", 1), decl("d", "x", 2)], true, 5);

        assert_eq!(registration.strategy(), ProviderStrategy::Lazy);
        assert_eq!(registration.len(), 1);
        assert_eq!(registration.get("d", "x").unwrap().data.value, json!(2));
    }

    #[test]
    fn test_lazy_index_shape() {
        let declarations = vec![
            decl("a", "one", 1),
            decl("a", "two", 2),
            decl("b", "one", 3),
        ];
        let index = LazyIndex::build(declarations);

        assert_eq!(index.domain_count(), 2);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("b", "one").unwrap().data.value, json!(3));
        assert!(index.get("a", "three").is_none());
        assert!(index.domain("a").is_some());
        assert_eq!(index.domain_settings("a").count(), 2);
    }

    #[test]
    fn test_duplicate_domain_names_collapse() {
        let mut second = decl("d", "y", 2);
        second.domain.enabled = false;
        let index = LazyIndex::build(vec![decl("d", "x", 1), second]);

        assert_eq!(index.domain_count(), 1);
        // Domain metadata comes from the last declaration seen
        assert!(!index.domain("d").unwrap().enabled);
    }

    #[test]
    fn test_eager_lookup_matches_lazy() {
        let declarations = vec![decl("d", "x", 1), decl("d", "x", 2)];
        let eager = select(declarations.clone(), false, 0);
        let lazy = select(declarations, true, 0);

        assert_eq!(eager.get("d", "x"), lazy.get("d", "x"));
        assert_eq!(eager.domain("d"), lazy.domain("d"));
        assert!(eager.get("d", "missing").is_none());
    }
}
