//! Copying a version's files out of the store.

use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StateError};
use crate::state::{parse_version_id, Store};

/// Which files [`export_version`] copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Yaml,
    #[default]
    All,
}

impl ExportFormat {
    /// Lowercase extensions (without the dot) this format selects.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Yaml => &["yaml", "yml"],
            Self::All => &["pdf", "yaml", "yml", "tex"],
        }
    }

    fn matches(self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => f.write_str("pdf"),
            Self::Yaml => f.write_str("yaml"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Copy a version's files into `output_dir`.
///
/// Only regular files directly inside the version directory are
/// considered. The output directory is created if needed and existing
/// files there are overwritten. Returns the destination paths sorted by
/// file name; nothing matching is not an error.
///
/// # Errors
///
/// - `InvalidInput` for a malformed ID, or if `output_dir` is the version
///   directory itself
/// - `NotFound` if the version or its directory does not exist
pub fn export_version(
    store: &Store,
    project: &str,
    version_id: &str,
    output_dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    parse_version_id(version_id)?;
    let state = store.load_project(project)?;
    let entry = state
        .version(version_id)
        .ok_or_else(|| StateError::not_found("Version", version_id))?;
    let version_dir = store.entry_dir(project, entry);
    if !version_dir.is_dir() {
        return Err(StateError::not_found(
            "Version directory",
            version_dir.display().to_string(),
        ));
    }

    let mut sources: Vec<PathBuf> = fs::read_dir(&version_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && format.matches(p))
        .collect();
    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if output_dir.exists() && output_dir.canonicalize()? == version_dir.canonicalize()? {
        return Err(StateError::invalid(format!(
            "Cannot export version into its own directory: {}",
            output_dir.display()
        )));
    }

    fs::create_dir_all(output_dir)?;
    let mut exported = Vec::with_capacity(sources.len());
    for src in sources {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = output_dir.join(name);
        fs::copy(&src, &dest)?;
        exported.push(dest);
    }

    debug!(project, version = version_id, %format, count = exported.len(), "exported files");
    Ok(exported)
}
