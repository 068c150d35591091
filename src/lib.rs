//! resume-state - File-based version tracking for resume projects.
//!
//! A store holds named projects. Each project keeps an append-only list
//! of versions of a `resume.yaml`, an active version pointer and the
//! parent link of every derived version.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Text extraction from imported PDF/DOCX files
//! - [`state`] - The on-disk store, project state and version IDs
//! - [`ui`] - Terminal output
//! - [`versions`] - Create, import, switch, diff and export operations
//!
//! # Example
//!
//! ```
//! use resume_state::state::Store;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let store = Store::open(temp.path().join(".resume_versions"));
//! store.init_project("demo", true).unwrap();
//!
//! assert_eq!(store.active_project().unwrap().as_deref(), Some("demo"));
//! assert!(store.load_project("demo").unwrap().versions.is_empty());
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod state;
pub mod ui;
pub mod versions;

pub use error::{Result, StateError};
