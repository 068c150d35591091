//! `resume-state version create` derives a version from an existing one.

use crate::cli::args::CreateArgs;
use crate::error::Result;
use crate::state::{Store, RESUME_FILE};
use crate::ui::UserInterface;
use crate::versions::{create_version, CreateOptions};

use super::dispatcher::{Command, CommandResult};

pub struct CreateCommand {
    store: Store,
    args: CreateArgs,
}

impl CreateCommand {
    pub fn new(store: Store, args: CreateArgs) -> Self {
        Self { store, args }
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let opts = CreateOptions {
            from_version: self.args.from.clone(),
            tag: self.args.tag.clone(),
            notes: self.args.notes.clone(),
            operation: self.args.operation,
        };
        let created = create_version(&self.store, &project, &opts)?;

        ui.success(&format!("Created {} in project: {}", created.id, project));
        ui.message(&format!("  Parent: {}", created.parent));
        ui.message(&format!("  Path: {}", created.path.display()));
        ui.message(&format!(
            "  YAML: {}",
            created.path.join(RESUME_FILE).display()
        ));
        Ok(CommandResult::success())
    }
}
