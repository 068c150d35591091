//! Command-line interface for resume-state.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ActiveArgs, Cli, Commands, CompletionsArgs, CreateArgs, DiffArgs, ExportArgs, ImportArgs,
    InitArgs, ListArgs, SwitchArgs, UseArgs, VersionCommands,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
