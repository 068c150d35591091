//! The `resume-state use` command sets the active project.

use crate::cli::args::UseArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

pub struct UseCommand {
    store: Store,
    args: UseArgs,
}

impl UseCommand {
    pub fn new(store: Store, args: UseArgs) -> Self {
        Self { store, args }
    }
}

impl Command for UseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.store.set_active_project(&self.args.name)?;
        ui.success(&format!("Active project: {}", self.args.name));
        Ok(CommandResult::success())
    }
}
