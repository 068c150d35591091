//! Version operations on a project.
//!
//! - [`create`] derives a new version from an existing one
//! - [`import`] brings a PDF/DOCX resume in as a new root version
//! - [`switch`] moves the active version pointer
//! - [`diff`] compares two versions' `resume.yaml`
//! - [`export`] copies a version's files out of the store
//!
//! Every operation takes the [`Store`](crate::state::Store) explicitly and
//! validates its inputs before writing anything.

pub mod create;
pub mod diff;
pub mod export;
pub mod import;
pub mod switch;

use std::path::PathBuf;

use crate::error::{Result, StateError};

pub use create::{create_version, CreateOptions};
pub use diff::{diff_versions, DEFAULT_CONTEXT};
pub use export::{export_version, ExportFormat};
pub use import::{import_resume, resume_scaffold, ImportOptions, ImportedVersion};
pub use switch::switch_version;

/// A version that was just written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedVersion {
    pub id: String,
    /// The version it was derived from.
    pub parent: String,
    /// The version directory.
    pub path: PathBuf,
}

/// Normalize a tag: empty means none, path separators are rejected.
pub(crate) fn validate_tag(tag: Option<&str>) -> Result<Option<&str>> {
    match tag {
        Some(t) if t.contains(['/', '\\']) || t == "." || t == ".." => Err(StateError::invalid(
            format!("Invalid tag: '{}' (tags become part of a directory name)", t),
        )),
        Some("") | None => Ok(None),
        Some(t) => Ok(Some(t)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    use crate::state::{DerivationOp, Store, VersionEntry, VersionSource, RESUME_FILE};

    /// A store in a temp dir with one initialized, active project.
    pub fn store_with_project(name: &str) -> (TempDir, Store) {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join(".resume_versions"));
        store.init_project(name, true).unwrap();
        (temp, store)
    }

    /// Add a version entry with the given YAML content and make it active.
    pub fn seed_version(store: &Store, project: &str, id: &str, tag: Option<&str>, yaml: &str) {
        let dir = store.version_dir(project, id, tag);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(RESUME_FILE), yaml).unwrap();

        let mut state = store.load_project(project).unwrap();
        state.push_active(VersionEntry {
            id: id.to_string(),
            tag: tag.map(String::from),
            created_at: Utc::now(),
            source: VersionSource::Derived {
                operation: DerivationOp::ManualEdit,
            },
            parent: None,
            notes: String::new(),
        });
        store.save_project(&mut state).unwrap();
    }
}
