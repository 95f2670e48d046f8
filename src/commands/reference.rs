//! The `reference` and `show-tables` commands.

use crate::cli::ReferenceArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::inject::{preview_file, update_file};
use crate::justfile::{ParseResult, evaluate_variables, parse_justfile};
use crate::render::{RenderOptions, render_table};
use std::collections::HashMap;
use std::path::Path;

/// Regenerate (or with `--check`, verify) the README tables.
pub fn cmd_reference(config: &Config, args: ReferenceArgs) -> Result<()> {
    let tables = build_tables(config)?;
    let readme = Path::new(&config.readme);

    if args.check {
        let (current, updated) = preview_file(readme, &tables)?;
        if current != updated {
            return Err(Error::Stale(format!(
                "justfile reference in '{}' is out of date.\nFix: run `boilerplate reference`.",
                readme.display()
            )));
        }
        println!("{} is up to date.", readme.display());
        return Ok(());
    }

    if update_file(readme, &tables)? {
        println!("Updated justfile reference in {}", readme.display());
    } else {
        println!("{} is already up to date.", readme.display());
    }
    Ok(())
}

/// Print every rendered table, preceded by its identifier.
pub fn cmd_show_tables(config: &Config) -> Result<()> {
    let parsed = parse_configured_justfile(config)?;
    let options = render_options(config);

    for (id, table) in parsed.tables() {
        println!("<!-- {} -->", id);
        println!("{}", render_table(table, options));
    }
    Ok(())
}

/// Parse the configured justfile and render each table, keyed by identifier.
pub(crate) fn build_tables(config: &Config) -> Result<HashMap<String, String>> {
    let parsed = parse_configured_justfile(config)?;
    Ok(render_all(&parsed, render_options(config)))
}

fn parse_configured_justfile(config: &Config) -> Result<ParseResult> {
    let justfile = Path::new(&config.justfile);
    let text = std::fs::read_to_string(justfile).map_err(|e| {
        Error::User(format!(
            "failed to read justfile '{}': {}",
            justfile.display(),
            e
        ))
    })?;

    // `just` must run next to the justfile it evaluates.
    let dir = justfile
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let evaluated = evaluate_variables(dir, &config.evaluate_argv()?, config.include_private)?;

    let parsed = parse_justfile(&text, &evaluated);
    if parsed.commands.is_empty() {
        tracing::warn!(path = %justfile.display(), "no recipes found in justfile");
    }
    tracing::info!(
        variables = parsed.variables.len(),
        commands = parsed.commands.len(),
        "parsed justfile"
    );
    Ok(parsed)
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        mark_variable_users: config.mark_variable_users,
    }
}

fn render_all(parsed: &ParseResult, options: RenderOptions) -> HashMap<String, String> {
    parsed
        .tables()
        .into_iter()
        .map(|(id, table)| (id.to_string(), render_table(table, options)))
        .collect()
}
