//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Records every call regardless of output mode, so tests can check what
/// a command tried to say.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    outputs: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Command output, including `key: value` lines and diffs.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Check whether any recorded line of any kind contains `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        [
            &self.messages,
            &self.successes,
            &self.warnings,
            &self.errors,
            &self.headers,
            &self.outputs,
        ]
        .iter()
        .any(|lines| lines.iter().any(|l| l.contains(needle)))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.outputs.push(format!("{}: {}", key, value));
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.key_value("Project", "demo");
        ui.output("o");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.headers(), ["h"]);
        assert_eq!(ui.outputs(), ["Project: demo", "o"]);
    }

    #[test]
    fn default_diff_goes_to_output() {
        let mut ui = MockUI::new();
        ui.show_diff("--- a\n+++ b\n");
        assert_eq!(ui.outputs(), ["--- a\n+++ b"]);
    }

    #[test]
    fn has_text_searches_everything() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.warning("Extraction failed for cv.pdf");
        assert!(ui.has_text("cv.pdf"));
        assert!(!ui.has_text("v2"));
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
