//! Priority-ordered provider registry
//!
//! The registry is the external-facing contract this crate produces
//! into: a collection of provider registrations ordered by priority,
//! consulted by downstream routing. Hosts with their own service wiring
//! implement [`SettingsRegistry`]; [`ProviderRegistry`] is the plain
//! in-memory implementation.

use crate::model::SettingDeclaration;
use crate::provider::ProviderRegistration;

/// The small registration interface any host can implement
pub trait SettingsRegistry {
    /// Insert one registration, honoring the priority ordering contract
    fn register(&mut self, registration: ProviderRegistration);
}

/// In-memory priority-ordered registry
///
/// Higher priority wins; registrations with equal priority keep their
/// registration order. Immutable once the build phase has finished
/// registering, so reads need no locking.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    entries: Vec<ProviderRegistration>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrations in priority order, highest first
    pub fn providers(&self) -> impl Iterator<Item = &ProviderRegistration> {
        self.entries.iter()
    }

    /// One registration by provider id
    #[must_use]
    pub fn find(&self, provider_id: &str) -> Option<&ProviderRegistration> {
        self.entries.iter().find(|r| r.provider_id() == provider_id)
    }

    /// Route a domain/name lookup through the providers
    ///
    /// Providers are consulted in priority order; the first one that
    /// knows the pair answers, so a higher-priority provider overrides
    /// lower-priority views of the same domain/name space.
    #[must_use]
    pub fn resolve(&self, domain: &str, name: &str) -> Option<&SettingDeclaration> {
        self.entries.iter().find_map(|r| r.get(domain, name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsRegistry for ProviderRegistry {
    fn register(&mut self, registration: ProviderRegistration) {
        // Stable insert: after every entry with priority >= the new one
        let position = self
            .entries
            .iter()
            .position(|r| r.priority() < registration.priority())
            .unwrap_or(self.entries.len());
        self.entries.insert(position, registration);
    }
}

// =============================================================================
// Tests
// =============================================================================
