//! Version ID parsing and allocation.
//!
//! Version IDs have the form `v<N>`. New IDs are allocated as one past the
//! highest well-formed ID in a project, so an ID is never handed out twice
//! even after its directory has been removed by hand.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use super::project::VersionEntry;
use crate::error::{Result, StateError};

static VERSION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^v(\d+)$").unwrap());

/// Parse a version ID and return its numeric component.
///
/// # Errors
///
/// Returns `InvalidInput` if the ID is not of the form `v<N>` or if `N`
/// does not fit in a `u64`.
pub fn parse_version_id(id: &str) -> Result<u64> {
    let caps = VERSION_ID.captures(id).ok_or_else(|| {
        StateError::invalid(format!(
            "Invalid version ID format: '{}'. Expected format: v1, v2, v3, ...",
            id
        ))
    })?;
    caps[1]
        .parse()
        .map_err(|_| StateError::invalid(format!("Version number out of range: '{}'", id)))
}

/// Check whether a version ID is well-formed.
pub fn is_valid_version_id(id: &str) -> bool {
    parse_version_id(id).is_ok()
}

/// Next free version ID for a list of entries.
///
/// IDs not of the form `v<N>` are skipped with a warning rather than
/// failing the scan.
///
/// # Errors
///
/// `InvalidInput` if a stored ID has a number too large for a `u64`, or if
/// the highest ID leaves no successor.
pub fn next_version_id(versions: &[VersionEntry]) -> Result<String> {
    let mut max: u64 = 0;
    for entry in versions {
        if !VERSION_ID.is_match(&entry.id) {
            warn!(id = %entry.id, "Skipping malformed version ID");
            continue;
        }
        max = max.max(parse_version_id(&entry.id)?);
    }
    let next = max
        .checked_add(1)
        .ok_or_else(|| StateError::invalid(format!("No version ID left after v{}", max)))?;
    Ok(format!("v{}", next))
}

/// Directory name for a version: `<id>` or `<id>_<tag>`.
pub fn version_dir_name(id: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) if !tag.is_empty() => format!("{}_{}", id, tag),
        _ => id.to_string(),
    }
}
