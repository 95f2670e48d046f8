//! HTML table rendering for justfile documentation.
//!
//! The output is committed to README.md and diffed in review, so the exact
//! bytes matter: the same input must always produce the same string, and the
//! layout matches what was previously maintained by hand.
//!
//! ```text
//! <table>
//! <tr><th>Command</th><th>Arguments</th><th>Description</th></tr>
//! <tr><th colspan="3">Release Builds</th></tr>
//! <tr>
//!   <td><code>build</code></td>
//!   <td>args&nbsp;(optional)</td>
//!   <td>Build in dev mode</td>
//! </tr>
//! </table>
//! ```

mod wrap;

use crate::justfile::{Groups, Row, Table};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Column width for wrapping description cells.
pub const WRAP_WIDTH: usize = 80;

/// Argument signature that gets a friendlier label.
const OPTIONAL_ARGS: &str = "+args=\"\"";
const OPTIONAL_ARGS_LABEL: &str = "args&nbsp;(optional)";

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*?)\*\*").expect("valid strong regex"));

static HYPERLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?P<title>[^\]]+)\]\((?P<url>[^)]*)\)").expect("valid hyperlink regex")
});

static BACKTICKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*?)`").expect("valid backticks regex"));

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append a dagger to the arguments cell of recipes whose body uses variables.
    pub mark_variable_users: bool,
}

/// Render a parsed table to HTML.
pub fn render_table(table: &Table, options: RenderOptions) -> String {
    render(&table.headers, &table.groups, options)
}

/// Render headers and grouped rows to an HTML `<table>`.
pub fn render(headers: &[&str; 3], groups: &Groups, options: RenderOptions) -> String {
    let mut out = String::from("<table>\n<tr>");
    for title in headers {
        let _ = write!(out, "<th>{}</th>", title);
    }
    out.push_str("</tr>\n");

    for (title, rows) in groups {
        if !title.is_empty() {
            let _ = writeln!(
                out,
                "<tr><th colspan=\"{}\">{}</th></tr>",
                headers.len(),
                code_spans(title)
            );
        }
        for row in rows {
            render_row(&mut out, row, options);
        }
    }

    out.push_str("</table>");
    out
}

fn render_row(out: &mut String, row: &Row, options: RenderOptions) {
    out.push_str("<tr>\n");
    for (idx, cell) in row.cells.iter().enumerate() {
        let mut html = render_cell(idx, cell);
        if idx == 1 && options.mark_variable_users && row.uses_variables {
            html.push_str("<sub>&dagger;</sub>");
        }
        let _ = writeln!(out, "  <td>{}</td>", html);
    }
    out.push_str("</tr>\n");
}

fn render_cell(idx: usize, cell: &str) -> String {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed == OPTIONAL_ARGS {
        return OPTIONAL_ARGS_LABEL.to_string();
    }
    if idx < 2 {
        return format!("<code>{}</code>", cell);
    }

    let cell = STRONG_RE.replace_all(cell, "<strong>${1}</strong>");
    let cell = HYPERLINK_RE.replace_all(&cell, "<a href=\"${url}\">${title}</a>");
    let cell = code_spans(&cell);

    wrap::wrap(&cell, WRAP_WIDTH)
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n  ")
}

fn code_spans(text: &str) -> String {
    BACKTICKS_RE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}
