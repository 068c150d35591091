//! Status command implementation.
//!
//! The `resume-state status` command shows the store, the active project
//! and its active version.

use std::fs;

use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::format_size;

/// The status command implementation.
pub struct StatusCommand {
    store: Store,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Resume version status");
        ui.key_value("Store", &self.store.root().display().to_string());

        let Some(project) = self.store.active_project()? else {
            ui.key_value("Active project", "(none)");
            ui.message("Create a project with `resume-state init <name>`.");
            return Ok(CommandResult::success());
        };
        ui.key_value("Active project", &project);

        let state = self.store.load_project(&project)?;
        ui.key_value(
            "Active version",
            state.active_version.as_deref().unwrap_or("(none)"),
        );
        ui.key_value("Total versions", &state.versions.len().to_string());

        if state.active_version.is_some() {
            match self.store.active_version_path(&project) {
                Ok(path) => {
                    ui.key_value("Active YAML", &path.display().to_string());
                    match fs::metadata(&path) {
                        Ok(meta) => ui.key_value("Size", &format_size(meta.len())),
                        Err(_) => ui.warning("Active YAML file is missing"),
                    }
                }
                Err(e) => ui.warning(&e.to_string()),
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::versions::test_support::{seed_version, store_with_project};
    use tempfile::TempDir;

    #[test]
    fn status_without_project() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = StatusCommand::new(Store::open(temp.path()))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_text("Active project: (none)"));
    }

    #[test]
    fn status_shows_active_version_and_size() {
        let (_temp, store) = store_with_project("demo");
        seed_version(&store, "demo", "v1", None, "name: Ada\n");
        let mut ui = MockUI::new();

        StatusCommand::new(store).execute(&mut ui).unwrap();

        assert!(ui.has_text("Active project: demo"));
        assert!(ui.has_text("Active version: v1"));
        assert!(ui.has_text("Total versions: 1"));
        assert!(ui.has_text("resume.yaml"));
        assert!(ui.has_text("Size: 10 bytes"));
    }

    #[test]
    fn status_with_empty_project() {
        let (_temp, store) = store_with_project("demo");
        let mut ui = MockUI::new();

        StatusCommand::new(store).execute(&mut ui).unwrap();

        assert!(ui.has_text("Active version: (none)"));
        assert!(ui.has_text("Total versions: 0"));
        assert!(!ui.has_text("Active YAML"));
    }
}
