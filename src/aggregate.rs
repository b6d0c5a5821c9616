//! Multi-source aggregation
//!
//! Merges inline declarations with declarations loaded from external
//! sources. Inline records come first, then each source's records in
//! the order the sources were listed; relative order within each group
//! is preserved. Nothing here resolves duplicate `(domain, name)` pairs:
//! precedence takes effect downstream wherever declarations are keyed by
//! that pair, where the later entry wins. Callers that want file
//! declarations to override inline ones get that for free from the
//! concatenation order.

use log::info;
use std::path::PathBuf;

use crate::error::Result;
use crate::model::SettingDeclaration;
use crate::normalize::{normalize_all, RawDeclaration};
use crate::source::SettingsSource;

/// Output of [`aggregate`]: the merged declarations plus the sources
/// that were actually read
#[derive(Debug, Clone, Default)]
pub struct AggregatedSettings {
    /// Normalized declarations in aggregation order
    pub declarations: Vec<SettingDeclaration>,

    /// Every source that resolved, in resolution order
    ///
    /// Exposed so a caching build step can register these files as
    /// build dependencies and invalidate when any of them changes.
    pub resolved_sources: Vec<PathBuf>,
}

/// Normalize inline declarations and append every resolvable source
///
/// Missing sources are skipped; an invalid declaration or an unparsable
/// source aborts the whole aggregation.
pub fn aggregate(
    inline: Vec<RawDeclaration>,
    sources: &[SettingsSource],
) -> Result<AggregatedSettings> {
    let mut declarations = normalize_all(inline)?;
    let mut resolved_sources = Vec::new();

    for source in sources {
        let Some(records) = source.resolve()? else {
            info!(
                "skipping unresolvable settings source '{}'",
                source.path().display()
            );
            continue;
        };
        declarations.extend(normalize_all(records)?);
        resolved_sources.push(source.path().to_path_buf());
    }

    Ok(AggregatedSettings {
        declarations,
        resolved_sources,
    })
}

// =============================================================================
// Tests
// =============================================================================
