//! Moving the active version pointer.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, StateError};
use crate::state::{parse_version_id, Store, RESUME_FILE};

/// Make `version_id` the active version of `project`.
///
/// Returns the path of that version's `resume.yaml`. The file itself is
/// not required to exist.
pub fn switch_version(store: &Store, project: &str, version_id: &str) -> Result<PathBuf> {
    parse_version_id(version_id)?;
    let mut state = store.load_project(project)?;
    let entry = state
        .version(version_id)
        .ok_or_else(|| StateError::not_found("Version", version_id))?;
    let path = store.entry_dir(project, entry).join(RESUME_FILE);

    state.active_version = Some(version_id.to_string());
    store.save_project(&mut state)?;

    debug!(project, version = version_id, "switched active version");
    Ok(path)
}
