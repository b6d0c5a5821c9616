//! Common test utilities for setreg integration tests
//!
//! Provides shared declaration builders and an on-disk source fixture.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Declaration builders
// =============================================================================

/// A minimal loose declaration record
pub fn declaration(domain: &str, name: &str, value: impl Into<Value>) -> Value {
    let value = value.into();
    json!({
        "name": name,
        "domain": domain,
        "type": "int",
        "data": value,
    })
}

/// A fully structured loose declaration record
pub fn full_declaration() -> Value {
    json!({
        "name": "support_email",
        "description": "Address shown in the footer",
        "domain": {"name": "support", "enabled": true, "read_only": true},
        "tags": ["contact", {"name": "ui"}],
        "type": "string",
        "data": "help@example.com",
    })
}

// =============================================================================
// Source fixture
// =============================================================================

/// Temp directory holding settings source files
pub struct SourceFixture {
    dir: TempDir,
}

impl SourceFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a JSON settings file holding the given records
    pub fn json_file(&self, name: &str, records: &[Value]) -> PathBuf {
        let path = self.dir.path().join(name);
        let content = json!({"settings": records});
        fs::write(&path, serde_json::to_string_pretty(&content).unwrap())
            .expect("Failed to write settings file");
        path
    }

    /// Write a settings file with raw content
    pub fn raw_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write settings file");
        path
    }

    /// A path inside the fixture that no file was written to
    pub fn missing_file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for SourceFixture {
    fn default() -> Self {
        Self::new()
    }
}
