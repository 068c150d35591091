//! Project state and version entries.
//!
//! A project is persisted as a single `project.json` holding its metadata,
//! the ordered list of versions and the active version pointer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema version written to `project.json`.
pub const PROJECT_SCHEMA_VERSION: &str = "1.0.0";

/// Persistent state for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    /// Schema version for migration.
    #[serde(alias = "version")]
    pub schema_version: String,

    /// Project name (also its directory name).
    pub name: String,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every save.
    pub updated_at: DateTime<Utc>,

    /// Currently selected version ID.
    pub active_version: Option<String>,

    /// Versions in creation order.
    #[serde(default)]
    pub versions: Vec<VersionEntry>,

    /// Open-ended data for extensions.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// A single version inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,

    /// Disambiguator appended to the directory name.
    #[serde(default)]
    pub tag: Option<String>,

    pub created_at: DateTime<Utc>,

    pub source: VersionSource,

    /// Version this one was derived from; `None` for imports.
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub notes: String,
}

/// Where a version's content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VersionSource {
    /// Imported from a PDF/DOCX file copied into `sources/`.
    Import { file: String, original_name: String },
    /// Copied from a parent version.
    Derived { operation: DerivationOp },
}

impl VersionSource {
    /// Short label used in listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Import { .. } => "import",
            Self::Derived { .. } => "derived",
        }
    }
}

/// Operation that produced a derived version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DerivationOp {
    #[default]
    ManualEdit,
    Optimize,
    Tailor,
}

impl fmt::Display for DerivationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ManualEdit => "manual_edit",
            Self::Optimize => "optimize",
            Self::Tailor => "tailor",
        };
        f.write_str(s)
    }
}

impl ProjectState {
    /// Fresh state for a newly initialized project.
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            schema_version: PROJECT_SCHEMA_VERSION.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            active_version: None,
            versions: Vec::new(),
            metadata: serde_json::Map::new(),
        }
    }

    /// Look up a version by ID.
    pub fn version(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Entry of the active version, if one is set and present.
    pub fn active_entry(&self) -> Option<&VersionEntry> {
        self.active_version.as_deref().and_then(|id| self.version(id))
    }

    /// Append a version and make it active.
    pub fn push_active(&mut self, entry: VersionEntry) {
        self.active_version = Some(entry.id.clone());
        self.versions.push(entry);
    }

    /// Refresh `updated_at` before a save.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
