//! Store discovery.
//!
//! Finds the `.resume_versions` directory to operate on. Independent stores
//! can live in different repositories without any configuration, while an
//! explicit override always wins.

use std::path::{Path, PathBuf};

/// Name of the store directory.
pub const STORE_DIR: &str = ".resume_versions";

/// Resolve the store root.
///
/// Resolution order:
/// 1. `override_path`, used as-is (a leading `~` is expanded)
/// 2. Inside a git repository: the nearest `.resume_versions` between
///    `start` and the repository root, else `<repo root>/.resume_versions`
/// 3. Outside a repository: the nearest `.resume_versions` in `start` or
///    any ancestor
/// 4. `<home>/.resume_versions`
pub fn locate_store(override_path: Option<&Path>, start: &Path, home: &Path) -> PathBuf {
    if let Some(path) = override_path {
        return expand_home(path, home);
    }

    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    if let Some(git_root) = find_git_root(&start) {
        for dir in start.ancestors() {
            let candidate = dir.join(STORE_DIR);
            if candidate.is_dir() {
                return candidate;
            }
            if dir == git_root {
                break;
            }
        }
        return git_root.join(STORE_DIR);
    }

    start
        .ancestors()
        .map(|dir| dir.join(STORE_DIR))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| home.join(STORE_DIR))
}

/// Find the nearest ancestor (inclusive) containing `.git`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
