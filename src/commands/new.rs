//! The `new` command: stamp out projects from the template directory.
//!
//! Each project is assembled in a staging directory next to its final
//! location, templated, sanity-checked and committed there, and only then
//! renamed into place. A failure at any step leaves no half-generated
//! project behind.

use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{build_ignore_set, copy_tree};
use crate::git;
use crate::process::{require_command, run_command};
use crate::template::{TemplateVars, template_tree, vars};
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub fn cmd_new(config: &Config, args: NewArgs) -> Result<()> {
    require_command("git")?;
    require_command("cargo")?;

    let destdirs = if args.destdirs.is_empty() {
        vec![prompt_destdir()?]
    } else {
        args.destdirs
    };

    let template_dir = Path::new(&config.template_dir);
    let author = git::discover_author(".");
    let now = Local::now();

    for dest in destdirs {
        if dest.exists() {
            tracing::warn!(path = %dest.display(), "destination already exists, skipping");
            continue;
        }

        let vars = template_vars(&dest, &author)?;
        new_project(template_dir, &dest, config, &vars, &now, &[])?;
        println!("Created new project at {}", dest.display());
    }

    Ok(())
}

/// The fixed variable set available to template placeholders.
pub(crate) fn template_vars(dest: &Path, author: &str) -> Result<TemplateVars> {
    let name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::User(format!(
                "cannot derive a project name from '{}'",
                dest.display()
            ))
        })?;

    Ok(vars([
        ("authors", author.to_string()),
        ("project-name", name.replace('_', "-")),
        ("crate_name", name.replace('-', "_")),
    ]))
}

/// Build the project in a staging directory, verify it, give it its first
/// commit, and move it to `dest`.
///
/// `git_env` is passed through to every git child process.
pub(crate) fn new_project(
    template_dir: &Path,
    dest: &Path,
    config: &Config,
    vars: &TemplateVars,
    now: &DateTime<Local>,
    git_env: &[(&str, &str)],
) -> Result<()> {
    let staging = staging_path(dest)?;
    if staging.exists() {
        return Err(Error::User(format!(
            "staging directory '{}' already exists (left over from a crashed run?). Remove it and try again.",
            staging.display()
        )));
    }

    let result = stage_project(template_dir, &staging, config, vars, now)
        .and_then(|()| check_manifest(&staging, vars))
        .and_then(|()| git::init_history(&staging, git_env))
        .and_then(|()| {
            std::fs::rename(&staging, dest).map_err(|e| {
                Error::User(format!(
                    "failed to move project into '{}': {}",
                    dest.display(),
                    e
                ))
            })
        });

    if result.is_err() && staging.exists() {
        let _ = std::fs::remove_dir_all(&staging);
    }
    result
}

/// Copy the template into `staging` and apply the template engine to it.
fn stage_project(
    template_dir: &Path,
    staging: &Path,
    config: &Config,
    vars: &TemplateVars,
    now: &DateTime<Local>,
) -> Result<()> {
    if !template_dir.is_dir() {
        return Err(Error::User(format!(
            "template directory '{}' does not exist",
            template_dir.display()
        )));
    }

    let ignore = build_ignore_set(&config.ignore)?;
    let copied = copy_tree(template_dir, staging, &ignore)?;
    let templated = template_tree(staging, vars, &config.normalized_extensions(), now)?;
    tracing::info!(copied, templated, "staged project");
    Ok(())
}

fn staging_path(dest: &Path) -> Result<PathBuf> {
    let name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::User(format!("invalid destination '{}'", dest.display())))?;
    Ok(dest.with_file_name(format!(".{}.partial", name)))
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
}

/// Fail if the generated manifest still names some other crate.
fn check_manifest(dir: &Path, vars: &TemplateVars) -> Result<()> {
    let output = run_command(dir, "cargo", &["metadata", "--no-deps", "--format-version", "1"])?;
    let names = package_names(&output.stdout)?;

    if manifest_matches(&names, vars) {
        Ok(())
    } else {
        Err(Error::User(format!(
            "generated project's Cargo.toml did not contain the project name (found {:?})",
            names
        )))
    }
}

fn package_names(metadata_json: &str) -> Result<Vec<String>> {
    let metadata: Metadata = serde_json::from_str(metadata_json)
        .map_err(|e| Error::Tool(format!("failed to parse `cargo metadata` output: {}", e)))?;
    Ok(metadata.packages.into_iter().map(|p| p.name).collect())
}

fn manifest_matches(names: &[String], vars: &TemplateVars) -> bool {
    let wanted: Vec<&str> = ["project-name", "crate_name"]
        .iter()
        .filter_map(|key| vars.get(*key).map(String::as_str))
        .collect();

    names
        .iter()
        .any(|name| wanted.iter().any(|w| name.contains(w)))
}

fn prompt_destdir() -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Path for new project: ");
        io::stdout()
            .flush()
            .map_err(|e| Error::User(format!("failed to write prompt: {}", e)))?;

        match lines.next() {
            Some(Ok(line)) if !line.trim().is_empty() => return Ok(PathBuf::from(line.trim())),
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(Error::User(format!("failed to read from stdin: {}", e))),
            None => return Err(Error::User("no project path given".to_string())),
        }
    }
}
