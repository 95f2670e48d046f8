//! Justfile documentation model.
//!
//! A justfile is read as a sequence of line-oriented directives: group
//! banners (`# ---- Title ----`), doc comments, variable assignments and
//! recipe signatures. The parser turns these into two tables of [`Row`]s,
//! grouped under the most recent banner.
//!
//! # Ordering
//!
//! Groups keep the order in which they were first seen. Rows inside a group
//! are sorted by name once parsing completes.

mod evaluate;
mod parser;

#[cfg(test)]
mod tests;

pub use evaluate::{EvaluatedVars, evaluate_variables, parse_evaluated};
pub use parser::parse_justfile;

use indexmap::IndexMap;

/// Identifier of the variables table in README sentinel blocks.
pub const VARIABLES_ID: &str = "variables";

/// Identifier of the commands table in README sentinel blocks.
pub const COMMANDS_ID: &str = "commands";

/// One documented variable or recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Name, value-or-arguments, description.
    pub cells: [String; 3],
    /// Set when a recipe body references `{{ ... }}` or `$`.
    pub uses_variables: bool,
}

impl Row {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            cells: [name.into(), value.into(), description.into()],
            uses_variables: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.cells[0]
    }
}

/// Group title (empty for ungrouped rows) to rows, in first-seen order.
pub type Groups = IndexMap<String, Vec<Row>>;

/// A table ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: [&'static str; 3],
    pub groups: Groups,
}

impl Table {
    fn new(headers: [&'static str; 3]) -> Self {
        Self {
            headers,
            groups: Groups::new(),
        }
    }

    /// Append a row to `group`, creating the group if this is its first row.
    ///
    /// Returns the row's index within the group.
    fn push(&mut self, group: &str, row: Row) -> usize {
        let rows = self.groups.entry(group.to_string()).or_default();
        rows.push(row);
        rows.len() - 1
    }

    fn sort_rows(&mut self) {
        for rows in self.groups.values_mut() {
            rows.sort_by(|a, b| a.name().cmp(b.name()));
        }
    }

    /// Total number of rows across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Both tables extracted from a justfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub variables: Table,
    pub commands: Table,
}

impl Default for ParseResult {
    fn default() -> Self {
        Self {
            variables: Table::new(["Variable", "Default Value", "Description"]),
            commands: Table::new(["Command", "Arguments", "Description"]),
        }
    }
}

impl ParseResult {
    /// All tables with their identifiers, in a fixed order.
    pub fn tables(&self) -> [(&'static str, &Table); 2] {
        [(VARIABLES_ID, &self.variables), (COMMANDS_ID, &self.commands)]
    }
}
