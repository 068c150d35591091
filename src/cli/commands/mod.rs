//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that touches the
//! store receives a [`Store`](crate::state::Store) handle, so tests can
//! point commands at a temporary directory.

pub mod active;
pub mod completions;
pub mod create;
pub mod diff;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod projects;
pub mod status;
pub mod switch;
pub mod use_project;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
