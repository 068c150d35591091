//! Unified diffs between versions.

use similar::TextDiff;
use std::fs;

use crate::error::{Result, StateError};
use crate::state::{parse_version_id, Store, RESUME_FILE};

/// Default number of context lines around each hunk.
pub const DEFAULT_CONTEXT: usize = 3;

/// Unified diff of two versions' `resume.yaml`.
///
/// Headers read `--- v1/resume.yaml` and `+++ v2/resume.yaml`. Identical
/// files produce an empty string. Both IDs are format-checked before the
/// project is read.
pub fn diff_versions(
    store: &Store,
    project: &str,
    version_a: &str,
    version_b: &str,
    context: usize,
) -> Result<String> {
    parse_version_id(version_a)?;
    parse_version_id(version_b)?;
    let state = store.load_project(project)?;
    let mut contents = Vec::with_capacity(2);
    for id in [version_a, version_b] {
        let entry = state
            .version(id)
            .ok_or_else(|| StateError::not_found("Version", id))?;
        let yaml = store.entry_dir(project, entry).join(RESUME_FILE);
        if !yaml.is_file() {
            return Err(StateError::not_found("YAML", yaml.display().to_string()));
        }
        contents.push(fs::read_to_string(&yaml)?);
    }

    let diff = TextDiff::from_lines(contents[0].as_str(), contents[1].as_str());
    Ok(diff
        .unified_diff()
        .context_radius(context)
        .header(
            &format!("{}/{}", version_a, RESUME_FILE),
            &format!("{}/{}", version_b, RESUME_FILE),
        )
        .to_string())
}
