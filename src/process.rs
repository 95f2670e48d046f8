//! External command runner.
//!
//! Wraps `std::process::Command` with captured stdout/stderr. A non-zero
//! exit becomes a fatal [`Error::Tool`] carrying the tool's own output, since
//! that output is usually the only useful diagnosis.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Output of a successful command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output (untrimmed; callers parse it line by line).
    pub stdout: String,
    /// Standard error (trimmed).
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run `program args...` in `cwd`, blocking until it exits.
///
/// There is no timeout: a hung tool hangs the run.
pub fn run_command<P: AsRef<Path>>(cwd: P, program: &str, args: &[&str]) -> Result<CommandOutput> {
    run_command_with_env(cwd, program, args, &[])
}

/// Like [`run_command`], with extra environment variables set on the child only.
pub fn run_command_with_env<P: AsRef<Path>>(
    cwd: P,
    program: &str,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<CommandOutput> {
    let cwd = cwd.as_ref();
    let command_line = display_command(program, args);
    tracing::debug!(command = %command_line, cwd = %cwd.display(), "running command");

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .map_err(|e| {
            Error::Tool(format!(
                "failed to execute `{}`: {}\nFix: ensure `{}` is installed and in PATH.",
                command_line, e, program
            ))
        })?;

    let command_output = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(command_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let detail = if command_output.stderr.is_empty() {
            command_output.stdout.trim()
        } else {
            command_output.stderr.as_str()
        };

        Err(Error::Tool(format!(
            "`{}` failed (exit code {}): {}",
            command_line, exit_code, detail
        )))
    }
}

/// Check that `program` can be spawned at all.
pub fn require_command(program: &str) -> Result<()> {
    run_command(".", program, &["--version"]).map(|_| ()).map_err(|_| {
        Error::User(format!(
            "could not find '{}' in PATH. Install it and try again.",
            program
        ))
    })
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
