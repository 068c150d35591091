//! Init command implementation.
//!
//! The `resume-state init` command creates a new project.

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    store: Store,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(store: Store, args: InitArgs) -> Self {
        Self { store, args }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.store.init_project(&self.args.name, !self.args.no_activate)?;

        ui.success(&format!("Created project: {}", self.args.name));
        ui.message(&format!("  Path: {}", path.display()));
        if self.store.active_project()?.as_deref() == Some(self.args.name.as_str()) {
            ui.message("  Set as active project");
        }
        Ok(CommandResult::success())
    }
}
