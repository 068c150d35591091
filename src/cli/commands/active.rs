//! `resume-state version active` prints where the active version lives.
//!
//! Output is a bare path so it can be used in shell substitutions.

use crate::cli::args::ActiveArgs;
use crate::error::Result;
use crate::state::Store;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

pub struct ActiveCommand {
    store: Store,
    args: ActiveArgs,
}

impl ActiveCommand {
    pub fn new(store: Store, args: ActiveArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ActiveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.store.resolve_project(self.args.project.as_deref())?;
        let yaml = self.store.active_version_path(&project)?;
        let path = match (self.args.dir, yaml.parent()) {
            (true, Some(dir)) => dir.to_path_buf(),
            _ => yaml,
        };
        ui.output(&path.display().to_string());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use crate::ui::MockUI;
    use crate::versions::test_support::{seed_version, store_with_project};

    #[test]
    fn prints_yaml_or_directory() {
        let (_temp, store) = store_with_project("demo");
        seed_version(&store, "demo", "v1", Some("base"), "a\n");

        let mut ui = MockUI::new();
        ActiveCommand::new(
            store.clone(),
            ActiveArgs {
                project: None,
                dir: false,
            },
        )
        .execute(&mut ui)
        .unwrap();
        assert!(ui.outputs()[0].ends_with("v1_base/resume.yaml"));

        let mut ui = MockUI::new();
        ActiveCommand::new(
            store,
            ActiveArgs {
                project: None,
                dir: true,
            },
        )
        .execute(&mut ui)
        .unwrap();
        assert!(ui.outputs()[0].ends_with("v1_base"));
    }

    #[test]
    fn no_active_version_is_an_error() {
        let (_temp, store) = store_with_project("demo");
        let mut ui = MockUI::new();

        let err = ActiveCommand::new(
            store,
            ActiveArgs {
                project: Some("demo".to_string()),
                dir: false,
            },
        )
        .execute(&mut ui)
        .unwrap_err();
        assert!(matches!(err, StateError::InvalidInput { .. }));
    }
}
