//! Deriving a new version from an existing one.

use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::{validate_tag, CreatedVersion};
use crate::error::{Result, StateError};
use crate::state::{
    next_version_id, parse_version_id, DerivationOp, Store, VersionEntry, VersionSource,
    RESUME_FILE,
};

/// Options for [`create_version`].
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Parent version; the active version when `None`.
    pub from_version: Option<String>,
    pub tag: Option<String>,
    /// Defaults to `Derived from <parent>` when empty.
    pub notes: String,
    pub operation: DerivationOp,
}

/// Create a version whose `resume.yaml` is a copy of its parent's.
///
/// The new version is appended to the project and becomes active.
///
/// # Errors
///
/// - `InvalidInput` for a malformed parent ID, or if no parent is given
///   and no version is active
/// - `NotFound` if the parent entry or its `resume.yaml` is missing
pub fn create_version(store: &Store, project: &str, opts: &CreateOptions) -> Result<CreatedVersion> {
    let tag = validate_tag(opts.tag.as_deref())?;
    if let Some(from) = &opts.from_version {
        parse_version_id(from)?;
    }
    let mut state = store.load_project(project)?;

    let parent_id = match &opts.from_version {
        Some(id) => id.clone(),
        None => state
            .active_version
            .clone()
            .ok_or_else(|| StateError::invalid("No active version to derive from"))?,
    };

    let parent = state
        .version(&parent_id)
        .ok_or_else(|| StateError::not_found("Version", &parent_id))?;
    let parent_yaml = store.entry_dir(project, parent).join(RESUME_FILE);
    if !parent_yaml.is_file() {
        return Err(StateError::not_found(
            "Parent YAML",
            parent_yaml.display().to_string(),
        ));
    }

    let id = next_version_id(&state.versions)?;
    let path: PathBuf = store.version_dir(project, &id, tag);
    fs::create_dir_all(&path)?;
    fs::copy(&parent_yaml, path.join(RESUME_FILE))?;

    let notes = if opts.notes.is_empty() {
        format!("Derived from {}", parent_id)
    } else {
        opts.notes.clone()
    };

    state.push_active(VersionEntry {
        id: id.clone(),
        tag: tag.map(String::from),
        created_at: Utc::now(),
        source: VersionSource::Derived {
            operation: opts.operation,
        },
        parent: Some(parent_id.clone()),
        notes,
    });
    store.save_project(&mut state)?;

    debug!(project, version = %id, parent = %parent_id, "created version");
    Ok(CreatedVersion {
        id,
        parent: parent_id,
        path,
    })
}
