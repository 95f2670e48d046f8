//! Git helpers for project generation.
//!
//! Only two things are needed from git: the user's identity for the
//! `authors` template variable, and a fresh history for each new project.
//! Extra environment variables are passed to the git child process only;
//! the tool never modifies its own environment.

use crate::error::{Error, Result};
use crate::process::{CommandOutput, run_command_with_env};
use std::path::Path;

/// Commit message for the first commit of a generated project.
pub const INITIAL_COMMIT_MESSAGE: &str = "Created new project from template";

/// Run a git command in `cwd`, mapping failures to [`Error::Git`].
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<CommandOutput> {
    run_git_with_env(cwd, args, &[])
}

/// Run a git command with extra variables set on the child process.
pub fn run_git_with_env<P: AsRef<Path>>(
    cwd: P,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<CommandOutput> {
    run_command_with_env(cwd, "git", args, envs).map_err(|e| match e {
        Error::Tool(msg) => Error::Git(msg),
        other => other,
    })
}

/// Read a git config value, treating "unset" and "git missing" alike.
fn config_value(cwd: &Path, key: &str, git_env: &[(&str, &str)]) -> Option<String> {
    run_git_with_env(cwd, &["config", "--get", key], git_env)
        .ok()
        .map(|output| output.stdout.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Best-effort `Name <email>` for the current user.
///
/// Prefers git's `user.name`/`user.email`, then the `USER` and `EMAIL`
/// environment variables. The name falls back to `unknown`; the email is
/// simply omitted when nothing is found.
pub fn discover_author<P: AsRef<Path>>(cwd: P) -> String {
    discover_author_with(cwd.as_ref(), &[], |key| std::env::var(key).ok())
}

fn discover_author_with(
    cwd: &Path,
    git_env: &[(&str, &str)],
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    let env = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let name = config_value(cwd, "user.name", git_env).or_else(|| env("USER"));
    let email = config_value(cwd, "user.email", git_env).or_else(|| env("EMAIL"));
    format_author(name.as_deref(), email.as_deref())
}

fn format_author(name: Option<&str>, email: Option<&str>) -> String {
    let name = name.unwrap_or("unknown");
    match email {
        Some(email) => format!("{} <{}>", name, email),
        None => name.to_string(),
    }
}

/// Initialize a repository at `repo_dir` and commit everything in it.
///
/// `git_env` is set on every git child, e.g. to supply a commit identity.
pub fn init_history<P: AsRef<Path>>(repo_dir: P, git_env: &[(&str, &str)]) -> Result<()> {
    let repo_dir = repo_dir.as_ref();
    run_git_with_env(repo_dir, &["init", "-q"], git_env)?;
    run_git_with_env(repo_dir, &["add", "."], git_env)?;
    run_git_with_env(repo_dir, &["commit", "-qm", INITIAL_COMMIT_MESSAGE], git_env)?;
    tracing::info!(path = %repo_dir.display(), "initialized git history");
    Ok(())
}
