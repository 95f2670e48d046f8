//! Tests for justfile parsing.

use crate::justfile::{COMMANDS_ID, EvaluatedVars, Row, VARIABLES_ID, parse_justfile};
use crate::test_support::SAMPLE_JUSTFILE;

fn no_vars() -> EvaluatedVars {
    EvaluatedVars::new()
}

fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(Row::name).collect()
}

#[test]
fn test_sample_variable_groups() {
    let result = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let groups = &result.variables.groups;

    assert_eq!(
        groups.keys().collect::<Vec<_>>(),
        vec!["", "Local installation"]
    );
    assert_eq!(
        groups[""],
        vec![Row::new(
            "CARGO_BUILD_TARGET",
            "\"i686-unknown-linux-musl\"",
            "Target triple for release builds"
        )]
    );
    assert_eq!(names(&groups["Local installation"]), vec!["INSTALL_DIR", "features"]);
    assert_eq!(
        groups["Local installation"][0].cells[2],
        "Where `install` puts the binary"
    );
    assert_eq!(groups["Local installation"][1].cells[1], "\"\"");
}

#[test]
fn test_private_variables_are_skipped() {
    let result = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let all: Vec<&str> = result
        .variables
        .groups
        .values()
        .flat_map(|rows| names(rows))
        .collect();
    assert!(!all.iter().any(|name| name.starts_with('_')));
}

#[test]
fn test_sample_command_groups() {
    let result = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let groups = &result.commands.groups;

    // The first recipe sits below the "Local installation" banner but is
    // still filed as top-level.
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["", "Release Builds"]);
    assert_eq!(names(&groups[""]), vec!["build", "check"]);
    assert_eq!(
        names(&groups["Release Builds"]),
        vec!["build-release", "install", "kcachegrind"]
    );

    let build = &groups[""][0];
    assert_eq!(build.cells[1], "+args=\"\"");
    assert_eq!(build.cells[2], "Build in dev mode");
}

#[test]
fn test_uses_variables_flag() {
    let result = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let groups = &result.commands.groups;

    assert!(groups[""][0].uses_variables, "build uses {{{{args}}}}");
    assert!(!groups[""][1].uses_variables, "check has a plain body");
    assert!(groups["Release Builds"][1].uses_variables, "install uses $INSTALL_DIR");
    assert!(!groups["Release Builds"][2].uses_variables);
}

#[test]
fn test_space_indented_lines_belong_to_last_recipe() {
    let text = "\
setup:
    echo plain

run:
    echo starting
  flags = \"{{extra}}\"
";
    let result = parse_justfile(text, &no_vars());
    let rows = &result.commands.groups[""];

    assert_eq!(names(rows), vec!["run", "setup"]);
    assert!(rows[0].uses_variables, "indented continuation counts toward run");
    assert!(!rows[1].uses_variables);
    assert!(result.variables.is_empty(), "indented assignment is not a variable");
}

#[test]
fn test_indented_line_before_any_recipe_is_ignored() {
    let text = "  echo $HOME\nlater:\n\ttrue\n";
    let result = parse_justfile(text, &no_vars());

    assert!(!result.commands.groups[""][0].uses_variables);
}

#[test]
fn test_evaluated_value_overrides_static_default() {
    let text = "MY_TARGET = \"linux\"\n";
    let mut evaluated = no_vars();
    evaluated.insert(
        "MY_TARGET".to_string(),
        "x86_64-unknown-linux-musl".to_string(),
    );

    let result = parse_justfile(text, &evaluated);

    assert_eq!(result.variables.groups[""][0].cells[1], "x86_64-unknown-linux-musl");
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let second = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    assert_eq!(first, second);
}

#[test]
fn test_rows_sorted_within_groups_but_groups_keep_order() {
    let text = "\
# --- Zeta ---
zz = \"1\"
aa = \"2\"

# --- Alpha ---
mm = \"3\"
bb = \"4\"
";
    let result = parse_justfile(text, &no_vars());
    let groups = &result.variables.groups;

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    assert_eq!(names(&groups["Zeta"]), vec!["aa", "zz"]);
    assert_eq!(names(&groups["Alpha"]), vec!["bb", "mm"]);
}

#[test]
fn test_duplicate_keys_produce_duplicate_rows() {
    let text = "x = \"1\"\nx = \"2\"\n";
    let result = parse_justfile(text, &no_vars());
    let rows = &result.variables.groups[""];

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[1], "\"1\"");
    assert_eq!(rows[1].cells[1], "\"2\"");
}

#[test]
fn test_doc_comments_do_not_span_blank_lines() {
    let text = "# orphaned comment\n\n# Real doc\n# continued\nkey = \"v\"\n";
    let result = parse_justfile(text, &no_vars());
    assert_eq!(result.variables.groups[""][0].cells[2], "Real doc continued");
}

#[test]
fn test_description_consumed_by_command() {
    let text = "# Documented\nfirst:\nsecond:\n";
    let result = parse_justfile(text, &no_vars());
    let rows = &result.commands.groups[""];

    assert_eq!(rows[0].cells[2], "Documented");
    assert_eq!(rows[1].cells[2], "");
}

#[test]
fn test_later_group_banner_applies_to_commands() {
    let text = "\
# --- Ignored For First ---
first:

# --- Second Group ---
second arg:
";
    let result = parse_justfile(text, &no_vars());
    let groups = &result.commands.groups;

    assert_eq!(names(&groups[""]), vec!["first"]);
    assert_eq!(groups["Second Group"][0].cells[1], "arg");
}

#[test]
fn test_variable_group_survives_until_first_command() {
    let text = "\
# --- Settings ---
a = \"1\"
cmd:
b = \"2\"
";
    let result = parse_justfile(text, &no_vars());
    let groups = &result.variables.groups;

    assert_eq!(names(&groups["Settings"]), vec!["a"]);
    // The first recipe reset the cursor to the top level.
    assert_eq!(names(&groups[""]), vec!["b"]);
}

#[test]
fn test_modern_assignment_and_directives() {
    let text = "\
set shell := [\"bash\", \"-c\"]
alias b := build
# Output directory
out_dir := \"dist\"
build:
";
    let result = parse_justfile(text, &no_vars());

    assert_eq!(
        result.variables.groups[""],
        vec![Row::new("out_dir", "\"dist\"", "Output directory")]
    );
    assert_eq!(names(&result.commands.groups[""]), vec!["build"]);
}

#[test]
fn test_quiet_recipe_and_dependencies() {
    let text = "@fmt +args=\"\": check\n\tcargo fmt\n";
    let result = parse_justfile(text, &no_vars());
    let row = &result.commands.groups[""][0];

    assert_eq!(row.name(), "fmt");
    assert_eq!(row.cells[1], "+args=\"\"");
}

#[test]
fn test_unrecognized_lines_are_ignored() {
    let text = "!!! garbage\n\tindented before any recipe $HOME\nkey = \"v\"\n";
    let result = parse_justfile(text, &no_vars());

    assert_eq!(result.variables.len(), 1);
    assert!(result.commands.is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let text = "# Doc\r\nkey = \"v\"\r\n";
    let result = parse_justfile(text, &no_vars());
    assert_eq!(result.variables.groups[""][0], Row::new("key", "\"v\"", "Doc"));
}

#[test]
fn test_tables_are_keyed_by_identifier() {
    let result = parse_justfile(SAMPLE_JUSTFILE, &no_vars());
    let [(first_id, first), (second_id, second)] = result.tables();

    assert_eq!((first_id, first), (VARIABLES_ID, &result.variables));
    assert_eq!((second_id, second), (COMMANDS_ID, &result.commands));
    assert_eq!(result.variables.headers, ["Variable", "Default Value", "Description"]);
    assert_eq!(result.commands.headers, ["Command", "Arguments", "Description"]);
}
