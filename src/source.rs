//! External settings sources
//!
//! A source is a file contributing additional loose declaration records,
//! wrapped in a top-level `settings` collection:
//!
//! ```yaml
//! settings:
//!   - name: enable_feature_x
//!     type: bool
//!     data: true
//! ```
//!
//! Resolution is tolerant: a listed file that does not exist is skipped,
//! since optional environment-specific override files are expected to be
//! absent in some environments. A file that exists but cannot be parsed
//! is fatal.

use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::normalize::RawDeclaration;

// =============================================================================
// Source Format
// =============================================================================

/// File format of a settings source, detected from the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl SourceFormat {
    /// Detect the format from a path's extension
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match extension {
            "json" => Ok(SourceFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            #[cfg(feature = "toml")]
            "toml" => Ok(SourceFormat::Toml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

// =============================================================================
// Settings Source
// =============================================================================

/// Top-level shape of a settings file
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: Vec<RawDeclaration>,
}

/// One external location contributing declaration records
#[derive(Debug, Clone)]
pub struct SettingsSource {
    path: PathBuf,
}

impl SettingsSource {
    /// Create a source for the given path
    ///
    /// Supports `~` expansion for home directory. The format is detected
    /// from the extension when the source is resolved.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        // Expand ~ to home directory
        let expanded = if path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(path.strip_prefix("~").unwrap_or(&path))
            } else {
                path
            }
        } else {
            path
        };
        Self { path: expanded }
    }

    /// The (expanded) location this source reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the source into loose declaration records
    ///
    /// Returns `Ok(None)` when the file does not exist. An unreadable or
    /// unparsable file is an error.
    pub fn resolve(&self) -> Result<Option<Vec<RawDeclaration>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let format = SourceFormat::detect(&self.path)?;
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::SourceRead {
            path: self.path.clone(),
            source: e,
        })?;

        let file = self.parse(format, &content)?;
        debug!(
            "settings source '{}' contributed {} declaration(s)",
            self.path.display(),
            file.settings.len()
        );
        Ok(Some(file.settings))
    }

    fn parse(&self, format: SourceFormat, content: &str) -> Result<SettingsFile> {
        let map_err = |reason: String| Error::SourceParse {
            path: self.path.clone(),
            reason,
        };

        match format {
            SourceFormat::Json => {
                serde_json::from_str(content).map_err(|e| map_err(e.to_string()))
            }
            #[cfg(feature = "yaml")]
            SourceFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| map_err(e.to_string()))
            }
            #[cfg(feature = "toml")]
            SourceFormat::Toml => toml::from_str(content).map_err(|e| map_err(e.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
