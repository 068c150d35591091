//! Importing a PDF/DOCX resume as a new root version.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::validate_tag;
use crate::error::{Result, StateError};
use crate::extract::{DocumentKind, TextExtractor};
use crate::state::{
    next_version_id, Store, VersionEntry, VersionSource, EXTRACTED_TEXT_FILE, RESUME_FILE,
};

/// Options for [`import_resume`].
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Defaults to `Imported from <file name>` when empty.
    pub notes: String,
    pub tag: Option<String>,
    /// Fail the import when text extraction fails.
    pub strict: bool,
}

/// Outcome of [`import_resume`].
#[derive(Debug, Clone)]
pub struct ImportedVersion {
    pub id: String,
    /// The version directory.
    pub path: PathBuf,
    /// Source copy under `sources/`.
    pub source_copy: PathBuf,
    /// Set when extraction failed and the import went ahead anyway.
    pub extraction_warning: Option<String>,
}

#[derive(Debug, Default, Serialize)]
struct Contact {
    name: String,
    email: String,
    phone: String,
    location: String,
}

/// Required top-level sections, all empty.
#[derive(Debug, Default, Serialize)]
struct ResumeScaffold {
    contact: Contact,
    summary: String,
    experience: Vec<serde_yaml::Value>,
    education: Vec<serde_yaml::Value>,
    skills: Vec<serde_yaml::Value>,
}

/// Placeholder `resume.yaml` for an imported file.
///
/// The sections are left empty for the user to fill from
/// `extracted_text.txt`; the header records where the content came from.
pub fn resume_scaffold(original_name: &str, version_id: &str, created_at: DateTime<Utc>) -> Result<String> {
    let body = serde_yaml::to_string(&ResumeScaffold::default())
        .map_err(|e| StateError::Other(e.into()))?;
    Ok(format!(
        "# Resume extracted from: {}\n\
         # Version: {}\n\
         # Created: {}\n\
         #\n\
         # Fill in the sections below from {}\n\
         \n\
         {}",
        original_name,
        version_id,
        created_at.to_rfc3339(),
        EXTRACTED_TEXT_FILE,
        body
    ))
}

/// Import `file` into `project` as a new active version with no parent.
///
/// The source file is copied into `sources/<id>_<name>`, its text goes to
/// `extracted_text.txt`, and a placeholder `resume.yaml` is written.
/// Extraction runs before anything is written, so a strict failure leaves
/// the store untouched. Without `strict` an extraction failure is logged,
/// reported in [`ImportedVersion::extraction_warning`], and the import
/// continues without `extracted_text.txt`.
///
/// # Errors
///
/// - `InvalidInput` for extensions other than PDF/DOCX or a bad tag
/// - `NotFound` if `file` or the project does not exist
/// - `ExternalToolFailure` if extraction fails under `strict`
pub fn import_resume(
    store: &Store,
    project: &str,
    file: &Path,
    opts: &ImportOptions,
    extractor: &dyn TextExtractor,
) -> Result<ImportedVersion> {
    let kind = DocumentKind::from_path(file)?;
    let tag = validate_tag(opts.tag.as_deref())?;
    if !file.is_file() {
        return Err(StateError::not_found("File", file.display().to_string()));
    }
    let original_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| StateError::invalid(format!("Not a file path: {}", file.display())))?;

    let mut state = store.load_project(project)?;
    let id = next_version_id(&state.versions)?;

    let (text, extraction_warning) = match extractor.extract(file, kind) {
        Ok(text) => (Some(text), None),
        Err(e) if opts.strict => return Err(e),
        Err(e) => {
            warn!(file = %file.display(), error = %e, "Extraction failed; continuing import");
            (None, Some(e.to_string()))
        }
    };

    let source_name = format!("{}_{}", id, original_name);
    let source_copy = store.project_dir(project).join("sources").join(&source_name);
    if let Some(parent) = source_copy.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(file, &source_copy)?;

    let path = store.version_dir(project, &id, tag);
    fs::create_dir_all(&path)?;
    if let Some(text) = text {
        fs::write(path.join(EXTRACTED_TEXT_FILE), text)?;
    }

    let created_at = Utc::now();
    fs::write(
        path.join(RESUME_FILE),
        resume_scaffold(&original_name, &id, created_at)?,
    )?;

    let notes = if opts.notes.is_empty() {
        format!("Imported from {}", original_name)
    } else {
        opts.notes.clone()
    };

    state.push_active(VersionEntry {
        id: id.clone(),
        tag: tag.map(String::from),
        created_at,
        source: VersionSource::Import {
            file: source_name,
            original_name,
        },
        parent: None,
        notes,
    });
    store.save_project(&mut state)?;

    debug!(project, version = %id, %kind, "imported resume");
    Ok(ImportedVersion {
        id,
        path,
        source_copy,
        extraction_warning,
    })
}
