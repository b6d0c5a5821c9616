//! Build entry point
//!
//! [`RegistryBuilder`] collects inline declarations, external sources
//! and strategy options, then runs the whole build phase in one call:
//! normalize, aggregate, select, and hand the registration to a
//! registry. Everything happens once, synchronously, at configuration
//! time; the build either completes or fails fast.

use log::info;
use serde_json::Value;
use std::path::PathBuf;

use crate::aggregate::aggregate;
use crate::error::{Error, Result};
use crate::normalize::RawDeclaration;
use crate::provider::{select, ProviderRegistration, DEFAULT_PRIORITY, DEFAULT_PROVIDER};
use crate::registry::SettingsRegistry;
use crate::source::SettingsSource;

/// Result of a build: the registration plus the build-dependency side
/// channel
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub registration: ProviderRegistration,

    /// Source files that were actually read, for build caches to
    /// invalidate on change
    pub resolved_sources: Vec<PathBuf>,
}

/// Builder for the configuration settings provider
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use setreg::RegistryBuilder;
///
/// let output = RegistryBuilder::new()
///     .declare(json!({
///         "name": "enable_feature_x",
///         "type": "bool",
///         "data": true,
///     }))
///     .source("config/settings.yaml")
///     .priority(-10)
///     .build()?;
/// # Ok::<(), setreg::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    provider_id: String,
    priority: i32,
    lazy: bool,
    inline: Vec<Value>,
    sources: Vec<SettingsSource>,
    log_summary: bool,
    log_target: Option<String>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider_id: DEFAULT_PROVIDER.into(),
            priority: DEFAULT_PRIORITY,
            lazy: true,
            inline: Vec::new(),
            sources: Vec::new(),
            log_summary: false,
            log_target: None,
        }
    }

    /// Add one inline declaration in the loose record shape
    #[must_use]
    pub fn declare(mut self, declaration: Value) -> Self {
        self.inline.push(declaration);
        self
    }

    /// Add several inline declarations, preserving order
    #[must_use]
    pub fn declare_all(mut self, declarations: impl IntoIterator<Item = Value>) -> Self {
        self.inline.extend(declarations);
        self
    }

    /// Add an external settings file
    ///
    /// Sources are read after the inline declarations, in the order
    /// given, so file declarations override inline ones wherever
    /// `(domain, name)` pairs are keyed. Missing files are skipped.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(SettingsSource::new(path));
        self
    }

    /// Choose lazy (default) or eager denormalization
    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Denormalize everything at build time
    #[must_use]
    pub fn eager(mut self) -> Self {
        self.lazy = false;
        self
    }

    /// Registry ordering weight for this provider (default -10)
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Register under a custom provider id instead of `"config"`
    #[must_use]
    pub fn provider_id(mut self, id: impl Into<String>) -> Self {
        self.provider_id = id.into();
        self
    }

    /// Emit a registration summary through the `log` facade
    ///
    /// Requires a log target to be set; enabling the summary without
    /// one fails the build.
    #[must_use]
    pub fn log_summary(mut self, enabled: bool) -> Self {
        self.log_summary = enabled;
        self
    }

    /// Log target for the registration summary
    #[must_use]
    pub fn log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = Some(target.into());
        self
    }

    /// Run the build phase: normalize, aggregate and select
    pub fn build(self) -> Result<BuildOutput> {
        if self.log_summary && self.log_target.is_none() {
            return Err(Error::Config("log target is missing".into()));
        }

        let inline = self
            .inline
            .into_iter()
            .map(RawDeclaration::from_value)
            .collect::<Result<Vec<_>>>()?;

        let aggregated = aggregate(inline, &self.sources)?;
        let registration = select(aggregated.declarations, self.lazy, self.priority)
            .with_provider_id(self.provider_id);

        if self.log_summary {
            let target = self.log_target.as_deref().unwrap_or_default();
            info!(
                target: target,
                "registered settings provider '{}': {} declaration(s), {:?} strategy, priority {}",
                registration.provider_id(),
                registration.len(),
                registration.strategy(),
                registration.priority(),
            );
        }

        Ok(BuildOutput {
            registration,
            resolved_sources: aggregated.resolved_sources,
        })
    }

    /// Build and register in one step
    ///
    /// Returns the resolved sources so callers still get the
    /// build-dependency side channel.
    pub fn build_into(self, registry: &mut impl SettingsRegistry) -> Result<Vec<PathBuf>> {
        let output = self.build()?;
        registry.register(output.registration);
        Ok(output.resolved_sources)
    }
}

// =============================================================================
// Tests
// =============================================================================
