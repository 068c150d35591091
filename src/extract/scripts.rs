//! Extraction through the external `resume-extractor` scripts.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::command::run_captured;
use super::{DocumentKind, TextExtractor};
use crate::error::{Result, StateError};

/// Environment variable pointing at the extractor scripts directory.
pub const EXTRACTOR_PATH_ENV: &str = "RESUME_EXTRACTOR_PATH";

const SCRIPTS_SUBDIR: [&str; 2] = ["resume-extractor", "scripts"];
const PDF_SCRIPT: &str = "extract_pdf.py";
const DOCX_SCRIPT: &str = "extract_docx.py";

/// Runs `uv run <scripts>/extract_{pdf,docx}.py <file>` and reads stdout.
#[derive(Debug, Clone)]
pub struct ScriptExtractor {
    scripts_dir: Option<PathBuf>,
    runner: String,
}

impl ScriptExtractor {
    /// Use an explicit scripts directory.
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: Some(scripts_dir.into()),
            runner: "uv".to_string(),
        }
    }

    /// Find the scripts directory.
    ///
    /// `RESUME_EXTRACTOR_PATH` wins when set. Otherwise `start` and its
    /// ancestors are searched for `resume-extractor/scripts` holding the
    /// PDF script. When nothing is found every extraction fails.
    pub fn discover(start: &Path) -> Self {
        let scripts_dir = match std::env::var_os(EXTRACTOR_PATH_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => find_scripts_dir(start),
        };
        debug!(scripts = ?scripts_dir, "extractor scripts");
        Self {
            scripts_dir,
            runner: "uv".to_string(),
        }
    }

    /// Use a launcher other than `uv`, invoked as `<runner> run <script> <file>`.
    pub fn with_runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }

    fn script_for(&self, source: &Path, kind: DocumentKind) -> Result<PathBuf> {
        let dir = self.scripts_dir.as_ref().ok_or_else(|| StateError::ExternalToolFailure {
            path: source.to_path_buf(),
            message: format!(
                "could not find resume-extractor scripts; set {}",
                EXTRACTOR_PATH_ENV
            ),
        })?;

        let script = dir.join(match kind {
            DocumentKind::Pdf => PDF_SCRIPT,
            DocumentKind::Docx => DOCX_SCRIPT,
        });
        if !script.is_file() {
            return Err(StateError::ExternalToolFailure {
                path: source.to_path_buf(),
                message: format!("extractor script not found: {}", script.display()),
            });
        }
        Ok(script)
    }
}

impl TextExtractor for ScriptExtractor {
    fn extract(&self, source: &Path, kind: DocumentKind) -> Result<String> {
        let script = self.script_for(source, kind)?;
        let args = vec![
            "run".to_string(),
            script.to_string_lossy().into_owned(),
            source.to_string_lossy().into_owned(),
        ];

        let output =
            run_captured(&self.runner, &args).map_err(|e| StateError::ExternalToolFailure {
                path: source.to_path_buf(),
                message: format!("failed to launch {}: {}", self.runner, e),
            })?;

        if !output.success {
            let stderr = output.stderr.trim();
            return Err(StateError::ExternalToolFailure {
                path: source.to_path_buf(),
                message: match output.exit_code {
                    Some(code) if stderr.is_empty() => format!("exited with code {}", code),
                    Some(code) => format!("exited with code {}: {}", code, stderr),
                    None => "terminated by signal".to_string(),
                },
            });
        }

        debug!(
            source = %source.display(),
            bytes = output.stdout.len(),
            elapsed_ms = output.duration.as_millis() as u64,
            "extracted text"
        );
        Ok(output.stdout)
    }
}

fn find_scripts_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| SCRIPTS_SUBDIR.iter().fold(dir.to_path_buf(), |p, s| p.join(s)))
        .find(|candidate| candidate.join(PDF_SCRIPT).is_file())
}
