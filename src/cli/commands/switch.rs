//! `resume-state version switch` changes the active version.

use crate::cli::args::SwitchArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;
use crate::versions::switch_version;

use super::dispatcher::{Command, CommandResult};

pub struct SwitchCommand {
    store: Store,
    args: SwitchArgs,
}

impl SwitchCommand {
    pub fn new(store: Store, args: SwitchArgs) -> Self {
        Self { store, args }
    }
}

impl Command for SwitchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let yaml = switch_version(&self.store, &project, &self.args.version_id)?;

        ui.success(&format!("Switched to {}", self.args.version_id));
        ui.message(&format!("  YAML: {}", yaml.display()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::versions::test_support::{seed_version, store_with_project};

    #[test]
    fn switch_reports_yaml_path() {
        let (_temp, store) = store_with_project("demo");
        seed_version(&store, "demo", "v1", None, "a\n");
        seed_version(&store, "demo", "v2", None, "b\n");
        let mut ui = MockUI::new();

        let args = SwitchArgs {
            version_id: "v1".to_string(),
            project: None,
        };
        SwitchCommand::new(store.clone(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.successes(), ["Switched to v1"]);
        assert!(ui.has_text("v1/resume.yaml"));
        let state = store.load_project("demo").unwrap();
        assert_eq!(state.active_version.as_deref(), Some("v1"));
    }
}
