//! Text extraction from imported resume files.
//!
//! Extraction is a pluggable capability: [`TextExtractor`] has a single
//! method, [`ScriptExtractor`] runs the external extractor scripts, and
//! tests substitute their own implementation.

pub mod command;
pub mod scripts;

use std::fmt;
use std::path::Path;

use crate::error::{Result, StateError};

pub use command::{run_captured, CommandOutput};
pub use scripts::{ScriptExtractor, EXTRACTOR_PATH_ENV};

/// Kind of document that can be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classify a file by extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// `InvalidInput` for anything other than `.pdf`, `.docx` or `.doc`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::Docx),
            _ => Err(StateError::invalid(format!(
                "Unsupported file type: '{}' (expected .pdf or .docx)",
                if ext.is_empty() { "<none>" } else { ext.as_str() }
            ))),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => f.write_str("PDF"),
            Self::Docx => f.write_str("DOCX"),
        }
    }
}

/// Extracts plain text from a resume document.
pub trait TextExtractor {
    /// Extract the text of `source`.
    ///
    /// Failures are reported as `ExternalToolFailure`.
    fn extract(&self, source: &Path, kind: DocumentKind) -> Result<String>;
}
