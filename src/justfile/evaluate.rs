//! Evaluated variable values from `just --evaluate`.
//!
//! The parser only sees the literal right-hand side of an assignment, which
//! for computed defaults (backticks, function calls, target triples) is not
//! what a reader wants to see. `just` itself reports the effective values.

use crate::error::{Error, Result};
use crate::process::run_command;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Variable name to effective value.
pub type EvaluatedVars = HashMap<String, String>;

static EVALUATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?P<key>[^\s:=]+)\s*:?=\s*"(?P<value>.*?)"\s*$"#)
        .expect("valid evaluated variable regex")
});

/// Parse `KEY = "VALUE"` lines (or `KEY := "VALUE"`).
///
/// Variables starting with `_` are dropped unless `include_private` is set.
/// Lines that do not match are logged and skipped.
pub fn parse_evaluated(output: &str, include_private: bool) -> EvaluatedVars {
    let mut results = EvaluatedVars::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() || (line.starts_with('_') && !include_private) {
            continue;
        }

        match EVALUATED_RE.captures(line) {
            Some(caps) => {
                results.insert(caps["key"].to_string(), caps["value"].to_string());
            }
            None => tracing::warn!("Unexpected line: {:?}", line),
        }
    }

    results
}

/// Run the evaluation command in `cwd` and parse its output.
///
/// `command` is the already-split argv, e.g. `["just", "--evaluate"]`.
pub fn evaluate_variables(
    cwd: &Path,
    command: &[String],
    include_private: bool,
) -> Result<EvaluatedVars> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::User("evaluate_command is empty".to_string()))?;

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_command(cwd, program, &args)?;
    let vars = parse_evaluated(&output.stdout, include_private);

    tracing::info!(count = vars.len(), "evaluated justfile variables");
    Ok(vars)
}
