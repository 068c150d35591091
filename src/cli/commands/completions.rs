//! Shell completions generation.
//!
//! The `resume-state completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "resume-state";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_completions_include_subcommands() {
        let output = generate(Shell::Bash);
        assert!(output.contains("resume-state"));
        assert!(output.contains("complete"));
        assert!(output.contains("export"));
    }

    #[test]
    fn zsh_completions_generate() {
        assert!(generate(Shell::Zsh).contains("resume-state"));
    }

    #[test]
    fn fish_completions_generate() {
        assert!(generate(Shell::Fish).contains("resume-state"));
    }
}
