//! Captured subprocess execution.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    pub stdout: String,

    pub stderr: String,

    pub duration: Duration,

    /// Whether the program exited with status 0.
    pub success: bool,
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// A program that exits nonzero is still `Ok`; only a failure to launch
/// is an error.
pub fn run_captured(program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(program, ?args, "running external command");
    let output = cmd.output()?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_launch_error() {
        let result = run_captured("resume-state-no-such-program", &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_on_success() {
        let output = run_captured("echo", &["hello".to_string()]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_exit_code_on_failure() {
        let args = vec!["-c".to_string(), "echo oops >&2; exit 3".to_string()];
        let output = run_captured("sh", &args).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
    }
}
