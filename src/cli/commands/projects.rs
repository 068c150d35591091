//! The `resume-state projects` command lists projects in the store.

use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

pub struct ProjectsCommand {
    store: Store,
}

impl ProjectsCommand {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl Command for ProjectsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let projects = self.store.list_projects()?;
        if projects.is_empty() {
            ui.message("No projects. Create one with `resume-state init <name>`.");
            return Ok(CommandResult::success());
        }

        let active = self.store.active_project()?;
        for name in &projects {
            let marker = if active.as_deref() == Some(name.as_str()) {
                "*"
            } else {
                " "
            };
            ui.output(&format!("{} {}", marker, name));
        }
        Ok(CommandResult::success())
    }
}
