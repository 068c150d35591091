//! List command implementation.
//!
//! `resume-state version list` prints a project's versions in creation
//! order. With `--verbose` each version also shows its parent and source.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand {
    store: Store,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(store: Store, args: ListArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let state = self.store.load_project(&project)?;

        if state.versions.is_empty() {
            ui.message(&format!("No versions in project: {}", project));
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} versions:", project));
        let verbose = ui.output_mode().shows_details();
        for entry in &state.versions {
            let active = state.active_version.as_deref() == Some(entry.id.as_str());
            ui.output(&display::version_line(entry, active));
            if verbose {
                for line in display::version_details(entry) {
                    ui.output(&line);
                }
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use crate::versions::test_support::{seed_version, store_with_project};
    use crate::versions::{create_version, CreateOptions};

    fn list(store: Store, mode: OutputMode) -> MockUI {
        let mut ui = MockUI::with_mode(mode);
        ListCommand::new(store, ListArgs { project: None })
            .execute(&mut ui)
            .unwrap();
        ui
    }

    #[test]
    fn lists_versions_in_creation_order_with_marker() {
        let (_temp, store) = store_with_project("demo");
        seed_version(&store, "demo", "v1", None, "a\n");
        create_version(&store, "demo", &CreateOptions::default()).unwrap();

        let ui = list(store, OutputMode::Normal);

        assert_eq!(ui.headers(), ["demo versions:"]);
        let lines = ui.outputs();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  v1 "));
        assert!(lines[1].starts_with("* v2 "));
        assert!(lines[1].contains("Derived from v1"));
    }

    #[test]
    fn verbose_adds_details() {
        let (_temp, store) = store_with_project("demo");
        seed_version(&store, "demo", "v1", None, "a\n");
        create_version(&store, "demo", &CreateOptions::default()).unwrap();

        let ui = list(store, OutputMode::Verbose);

        assert!(ui.has_text("parent: v1"));
        assert!(ui.has_text("operation: manual_edit"));
    }

    #[test]
    fn empty_project_message() {
        let (_temp, store) = store_with_project("demo");
        let ui = list(store, OutputMode::Normal);
        assert_eq!(ui.messages(), ["No versions in project: demo"]);
    }
}
