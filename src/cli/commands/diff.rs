//! `resume-state version diff` shows a unified diff between two versions.

use crate::cli::args::DiffArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;
use crate::versions::diff_versions;

use super::dispatcher::{Command, CommandResult};

pub struct DiffCommand {
    store: Store,
    args: DiffArgs,
}

impl DiffCommand {
    pub fn new(store: Store, args: DiffArgs) -> Self {
        Self { store, args }
    }
}

impl Command for DiffCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let diff = diff_versions(
            &self.store,
            &project,
            &self.args.version_a,
            &self.args.version_b,
            self.args.context,
        )?;

        if diff.is_empty() {
            ui.message(&format!(
                "No differences between {} and {}",
                self.args.version_a, self.args.version_b
            ));
        } else {
            ui.show_diff(&diff);
        }
        Ok(CommandResult::success())
    }
}
