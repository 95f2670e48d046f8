//! Template engine for generated projects.
//!
//! An ultra-primitive Liquid-style applicator. It performs two passes over a
//! file's text:
//!
//! 1. `{{ name }}` placeholders are replaced with values from the variable
//!    map, and `{{ "now" | date: "<strftime>" }}` is replaced with the
//!    current local time.
//! 2. Lines ending in a `# TEMPLATE:REMOVE` or `// TEMPLATE:REMOVE` comment
//!    are dropped entirely.
//!
//! # Error Handling
//!
//! There is no fallback for unknown placeholders. A half-substituted scaffold
//! is worse than no scaffold, so the first unresolved name aborts rendering
//! and nothing is produced.

mod files;

pub use files::{is_templatable, template_file, template_tree};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Variables available to `{{ name }}` placeholders.
pub type TemplateVars = BTreeMap<String, String>;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").expect("valid placeholder regex"));

static DATE_FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""now"\s*\|\s*date:\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid date regex")
});

static REMOVE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(#|//) TEMPLATE:REMOVE\s*$").expect("valid marker regex"));

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder referenced a name missing from the variable map.
    UndefinedVariable {
        /// The unresolved name, exactly as written between the braces.
        name: String,
        /// The names that would have resolved.
        known: Vec<String>,
    },
    /// The `date` filter was given a strftime pattern chrono cannot format.
    InvalidDateFormat {
        /// The offending pattern.
        pattern: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, known } => {
                write!(f, "no such template variable '{}'. Valid variables are:", name)?;
                for key in known {
                    write!(f, "\n\t{{{{ {} }}}}", key)?;
                }
                write!(f, "\n\t{{{{ \"now\" | date: \"<strftime string>\" }}}}")
            }
            TemplateError::InvalidDateFormat { pattern } => {
                write!(f, "invalid strftime pattern '{}' in date filter", pattern)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Apply the template to `text` using the current local time for `date`.
#[allow(dead_code)]
pub fn apply_template(text: &str, vars: &TemplateVars) -> Result<String, TemplateError> {
    apply_template_at(text, vars, &Local::now())
}

/// Apply the template to `text`, formatting `date` filters against `now`.
///
/// Placeholders are substituted first, then marked lines are removed, so a
/// placeholder on a removed line must still resolve.
pub fn apply_template_at(
    text: &str,
    vars: &TemplateVars,
    now: &DateTime<Local>,
) -> Result<String, TemplateError> {
    let substituted = substitute(text, vars, now)?;
    Ok(strip_removed_lines(&substituted))
}

fn substitute(
    text: &str,
    vars: &TemplateVars,
    now: &DateTime<Local>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always present");
        let expr = caps.get(1).map_or("", |m| m.as_str());

        result.push_str(&text[last..whole.start()]);
        result.push_str(&resolve(expr, vars, now)?);
        last = whole.end();
    }
    result.push_str(&text[last..]);

    Ok(result)
}

fn resolve(expr: &str, vars: &TemplateVars, now: &DateTime<Local>) -> Result<String, TemplateError> {
    // An expression led by the date filter is a date expression; text after
    // the filter is kept as written.
    if DATE_FILTER_RE.find(expr).is_some_and(|m| m.start() == 0) {
        return expand_dates(expr, now);
    }

    vars.get(expr)
        .cloned()
        .ok_or_else(|| TemplateError::UndefinedVariable {
            name: expr.to_string(),
            known: vars.keys().cloned().collect(),
        })
}

fn expand_dates(expr: &str, now: &DateTime<Local>) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(expr.len());
    let mut last = 0;

    for caps in DATE_FILTER_RE.captures_iter(expr) {
        let whole = caps.get(0).expect("group 0 always present");
        let pattern = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());

        result.push_str(&expr[last..whole.start()]);
        result.push_str(&format_date(now, pattern)?);
        last = whole.end();
    }
    result.push_str(&expr[last..]);

    Ok(result)
}

fn format_date(now: &DateTime<Local>, pattern: &str) -> Result<String, TemplateError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TemplateError::InvalidDateFormat {
            pattern: pattern.to_string(),
        });
    }
    Ok(now.format_with_items(items.into_iter()).to_string())
}

/// Drop every line carrying a removal marker; keep all others verbatim.
pub fn strip_removed_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !REMOVE_MARKER_RE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> TemplateVars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
