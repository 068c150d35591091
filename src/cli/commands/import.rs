//! Import command implementation.
//!
//! The `resume-state import` command brings a PDF or DOCX resume into a
//! project as a new root version.

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::extract::TextExtractor;
use crate::state::{Store, EXTRACTED_TEXT_FILE, RESUME_FILE};
use crate::ui::UserInterface;
use crate::versions::{import_resume, ImportOptions};

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    store: Store,
    args: ImportArgs,
    extractor: Box<dyn TextExtractor>,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(store: Store, args: ImportArgs, extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            store,
            args,
            extractor,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let opts = ImportOptions {
            notes: self.args.notes.clone(),
            tag: self.args.tag.clone(),
            strict: self.args.strict,
        };

        let imported = import_resume(
            &self.store,
            &project,
            &self.args.file,
            &opts,
            self.extractor.as_ref(),
        )?;

        if let Some(warning) = &imported.extraction_warning {
            ui.warning(warning);
            ui.warning("Continuing with import. You may need to extract the text manually.");
        }

        let source_name = self
            .args
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.success(&format!("Imported as {} in project: {}", imported.id, project));
        ui.message(&format!("  Source: {}", source_name));
        ui.message(&format!("  Version path: {}", imported.path.display()));
        ui.message(&format!(
            "  YAML: {}",
            imported.path.join(RESUME_FILE).display()
        ));
        if imported.extraction_warning.is_none() {
            ui.message(&format!(
                "  Extracted text: {}",
                imported.path.join(EXTRACTED_TEXT_FILE).display()
            ));
            ui.message("");
            ui.message(&format!("Next: fill in {} from {}", RESUME_FILE, EXTRACTED_TEXT_FILE));
        }
        Ok(CommandResult::success())
    }
}
