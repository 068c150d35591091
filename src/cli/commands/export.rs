//! `resume-state version export` copies a version's files out of the store.

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;
use crate::versions::export_version;

use super::dispatcher::{Command, CommandResult};

pub struct ExportCommand {
    store: Store,
    args: ExportArgs,
}

impl ExportCommand {
    pub fn new(store: Store, args: ExportArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let exported = export_version(
            &self.store,
            &project,
            &self.args.version_id,
            &self.args.output,
            self.args.format,
        )?;

        if exported.is_empty() {
            ui.warning(&format!(
                "No matching files found in {}",
                self.args.version_id
            ));
            return Ok(CommandResult::success());
        }

        ui.success(&format!(
            "Exported {} file(s) to {}:",
            exported.len(),
            self.args.output.display()
        ));
        for path in &exported {
            if let Some(name) = path.file_name() {
                ui.output(&format!("  {}", name.to_string_lossy()));
            }
        }
        Ok(CommandResult::success())
    }
}
