//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::state::DerivationOp;
use crate::versions::{ExportFormat, DEFAULT_CONTEXT};

/// resume-state - Version tracking for resume projects.
#[derive(Debug, Parser)]
#[command(name = "resume-state")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the version store (overrides discovery)
    #[arg(long, global = true, env = "RESUME_VERSIONS_PATH")]
    pub store: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project
    Init(InitArgs),

    /// Set the active project
    Use(UseArgs),

    /// List projects
    Projects,

    /// Import a PDF or DOCX resume as a new version
    Import(ImportArgs),

    /// Show store, project and version status
    Status,

    /// Manage versions of a project
    #[command(subcommand)]
    Version(VersionCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Project name
    pub name: String,

    /// Do not make the new project active (unless none is active yet)
    #[arg(long)]
    pub no_activate: bool,
}

/// Arguments for the `use` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UseArgs {
    /// Project name
    pub name: String,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// PDF or DOCX file to import
    pub file: PathBuf,

    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Notes for the version
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// Tag appended to the version directory name
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Fail if text extraction fails
    #[arg(short, long)]
    pub strict: bool,
}

/// Version subcommands.
#[derive(Debug, Subcommand)]
pub enum VersionCommands {
    /// List versions
    List(ListArgs),

    /// Create a version derived from an existing one
    Create(CreateArgs),

    /// Set the active version
    Switch(SwitchArgs),

    /// Show a unified diff between two versions
    Diff(DiffArgs),

    /// Copy a version's files to a directory
    Export(ExportArgs),

    /// Print the path of the active version's resume.yaml
    Active(ActiveArgs),
}

/// Arguments for `version list`.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for `version create`.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Parent version (defaults to the active version)
    #[arg(short, long = "from")]
    pub from: Option<String>,

    /// Tag appended to the version directory name
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Notes for the version
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// How the version was derived
    #[arg(short, long, value_enum, default_value_t = DerivationOp::ManualEdit)]
    pub operation: DerivationOp,
}

/// Arguments for `version switch`.
#[derive(Debug, Clone, clap::Args)]
pub struct SwitchArgs {
    /// Version ID (e.g. v2)
    pub version_id: String,

    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for `version diff`.
#[derive(Debug, Clone, clap::Args)]
pub struct DiffArgs {
    /// First version ID
    pub version_a: String,

    /// Second version ID
    pub version_b: String,

    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Lines of context around each change
    #[arg(short, long, default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,
}

/// Arguments for `version export`.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Version ID
    pub version_id: String,

    /// Output directory
    pub output: PathBuf,

    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Which files to export
    #[arg(short, long, value_enum, default_value_t = ExportFormat::All)]
    pub format: ExportFormat,
}

/// Arguments for `version active`.
#[derive(Debug, Clone, clap::Args)]
pub struct ActiveArgs {
    /// Project name (defaults to the active project)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Print the version directory instead of resume.yaml
    #[arg(short, long)]
    pub dir: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
