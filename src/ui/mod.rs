//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] which records everything for assertions
//!
//! # Example
//!
//! ```
//! use resume_state::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Created v2");
//! assert_eq!(ui.successes(), ["Created v2"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// Status messages respect the output mode. [`output`](Self::output)
/// carries a command's actual result (a listing, a path, a diff) and is
/// always printed.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);

    /// Print command output.
    fn output(&mut self, text: &str);

    /// Print a unified diff.
    fn show_diff(&mut self, diff: &str) {
        self.output(diff.trim_end_matches('\n'));
    }
}
