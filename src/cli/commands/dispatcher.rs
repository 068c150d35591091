//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, VersionCommands};
use crate::error::Result;
use crate::extract::ScriptExtractor;
use crate::state::Store;
use crate::ui::UserInterface;

use super::active::ActiveCommand;
use super::completions::CompletionsCommand;
use super::create::CreateCommand;
use super::diff::DiffCommand;
use super::export::ExportCommand;
use super::import::ImportCommand;
use super::init::InitCommand;
use super::list::ListCommand;
use super::projects::ProjectsCommand;
use super::status::StatusCommand;
use super::switch::SwitchCommand;
use super::use_project::UseCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    store_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher. `store_override` comes from `--store` or
    /// `RESUME_VERSIONS_PATH`.
    pub fn new(store_override: Option<PathBuf>) -> Self {
        Self { store_override }
    }

    pub fn store_override(&self) -> Option<&Path> {
        self.store_override.as_deref()
    }

    fn store(&self) -> Result<Store> {
        Store::discover(self.store_override())
    }

    /// Dispatch and execute a command.
    ///
    /// The store is only located for commands that use it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => InitCommand::new(self.store()?, args.clone()).execute(ui),
            Commands::Use(args) => UseCommand::new(self.store()?, args.clone()).execute(ui),
            Commands::Projects => ProjectsCommand::new(self.store()?).execute(ui),
            Commands::Import(args) => {
                let extractor = ScriptExtractor::discover(&std::env::current_dir()?);
                ImportCommand::new(self.store()?, args.clone(), Box::new(extractor)).execute(ui)
            }
            Commands::Status => StatusCommand::new(self.store()?).execute(ui),
            Commands::Version(sub) => self.dispatch_version(sub, ui),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }

    fn dispatch_version(
        &self,
        sub: &VersionCommands,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let store = self.store()?;
        match sub {
            VersionCommands::List(args) => ListCommand::new(store, args.clone()).execute(ui),
            VersionCommands::Create(args) => CreateCommand::new(store, args.clone()).execute(ui),
            VersionCommands::Switch(args) => SwitchCommand::new(store, args.clone()).execute(ui),
            VersionCommands::Diff(args) => DiffCommand::new(store, args.clone()).execute(ui),
            VersionCommands::Export(args) => ExportCommand::new(store, args.clone()).execute(ui),
            VersionCommands::Active(args) => ActiveCommand::new(store, args.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_against_override_store() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("store");
        let dispatcher = CommandDispatcher::new(Some(root.clone()));
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["resume-state", "init", "demo"]);
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(root.join("projects").join("demo").join("project.json").exists());
        assert_eq!(
            Store::open(&root).active_project().unwrap().as_deref(),
            Some("demo")
        );
    }

    #[test]
    fn version_commands_share_the_store() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(Some(temp.path().to_path_buf()));
        let mut ui = MockUI::new();

        dispatcher
            .dispatch(&Cli::parse_from(["resume-state", "init", "demo"]), &mut ui)
            .unwrap();
        let result = dispatcher
            .dispatch(&Cli::parse_from(["resume-state", "version", "list"]), &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_text("No versions in project: demo"));
    }
}
