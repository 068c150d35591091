//! JSON persistence with atomic replacement.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StateError};

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading state file");
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StateError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
///
/// The content is written to a temporary file next to the destination,
/// flushed to disk, then renamed over the destination. Readers see either
/// the old file or the new one, never a partial write.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().ok_or_else(|| StateError::Parse {
        path: path.to_path_buf(),
        message: "path has no parent directory".to_string(),
    })?;
    fs::create_dir_all(parent)?;

    let mut content = serde_json::to_string_pretty(value).map_err(|e| StateError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    content.push('\n');

    let temp_path = temp_path_for(path);
    debug!(path = %path.display(), temp = %temp_path.display(), "writing state file");

    if let Err(e) = write_and_rename(&temp_path, path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}

fn write_and_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)
}

/// Temp file name in the destination's directory, unique per process.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "state".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
