//! Single-pass line classifier for justfiles.

use super::{EvaluatedVars, ParseResult, Row};
use regex::Regex;
use std::sync::LazyLock;

static GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*--+\s+(?P<title>.*?)\s+--+\s*$").expect("valid group regex")
});

static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:set|alias|import|mod)\s").expect("valid directive regex"));

static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:export\s+)?(?P<key>[^\s:=]+)\s*:?=\s*(?P<value>.*?)\s*$")
        .expect("valid variable regex")
});

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@?(?P<name>\S+)\s*(?P<args>[^:]*?):[^:\n]*$").expect("valid command regex")
});

/// Parser state carried from one line to the next.
#[derive(Debug, Default)]
struct Cursor {
    /// Title of the most recent group banner.
    group: String,
    /// Doc-comment text accumulated since the last blank line or entry.
    description: String,
    /// Group title and index of the most recently added recipe.
    last_command: Option<(String, usize)>,
}

impl Cursor {
    fn take_description(&mut self) -> String {
        let description = self.description.trim().to_string();
        self.description.clear();
        description
    }
}

/// Parse justfile text into variable and command tables.
///
/// Values in `evaluated` replace the literal right-hand side of matching
/// assignments. Lines that fit none of the known shapes are skipped.
pub fn parse_justfile(text: &str, evaluated: &EvaluatedVars) -> ParseResult {
    let mut result = ParseResult::default();
    let mut cursor = Cursor::default();

    // Leading whitespace is significant, so lines are never trimmed up front.
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        parse_line(line, evaluated, &mut cursor, &mut result);
    }

    result.variables.sort_rows();
    result.commands.sort_rows();
    result
}

fn parse_line(
    line: &str,
    evaluated: &EvaluatedVars,
    cursor: &mut Cursor,
    result: &mut ParseResult,
) {
    // Doc comments end at blank lines.
    if line.trim().is_empty() {
        cursor.description.clear();
        return;
    }

    if let Some(caps) = GROUP_RE.captures(line) {
        cursor.description.clear();
        cursor.group = caps["title"].trim().to_string();
        return;
    }

    if line.starts_with('#') {
        cursor.description.push(' ');
        cursor.description.push_str(line.trim_start_matches('#').trim());
        return;
    }

    if DIRECTIVE_RE.is_match(line) {
        tracing::debug!(line, "skipping justfile directive");
        return;
    }

    if let Some(caps) = VARIABLE_RE.captures(line) {
        let key = &caps["key"];
        if key.starts_with('_') {
            tracing::trace!(key, "skipping private variable");
            return;
        }

        let value = evaluated
            .get(key)
            .map(String::as_str)
            .unwrap_or(&caps["value"]);
        let row = Row::new(key, value, cursor.take_description());
        result.variables.push(&cursor.group, row);
        return;
    }

    if let Some(caps) = COMMAND_RE.captures(line) {
        // The first recipe is always top-level, even below a variable banner.
        if cursor.last_command.is_none() {
            cursor.group.clear();
        }

        let row = Row::new(&caps["name"], &caps["args"], cursor.take_description());
        let index = result.commands.push(&cursor.group, row);
        cursor.last_command = Some((cursor.group.clone(), index));
        return;
    }

    if line.starts_with(['\t', ' ']) {
        if (line.contains("{{") || line.contains('$'))
            && let Some((group, index)) = &cursor.last_command
            && let Some(row) = result
                .commands
                .groups
                .get_mut(group)
                .and_then(|rows| rows.get_mut(*index))
        {
            row.uses_variables = true;
        }
        return;
    }

    tracing::debug!(line, "ignoring unrecognized justfile line");
}
