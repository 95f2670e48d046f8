//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the boilerplate tool.
///
/// Relative paths are resolved against the directory the tool runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // README reference
    // =========================================================================
    /// Justfile to document.
    #[serde(default = "default_justfile")]
    pub justfile: String,

    /// Document holding the `BEGIN TABLE` / `END TABLE` blocks.
    #[serde(default = "default_readme")]
    pub readme: String,

    /// Command printing `KEY = "VALUE"` lines, run in the justfile's directory.
    #[serde(default = "default_evaluate_command")]
    pub evaluate_command: String,

    /// Whether `_private` variables from the evaluate command are kept.
    #[serde(default)]
    pub include_private: bool,

    /// Append a dagger to the arguments of recipes whose body uses variables.
    #[serde(default)]
    pub mark_variable_users: bool,

    // =========================================================================
    // Project generation
    // =========================================================================
    /// Directory copied to create a new project.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// File extensions to apply template processing to (no leading dots).
    #[serde(default = "default_templatable_extensions")]
    pub templatable_extensions: Vec<String>,

    /// Globs (relative to `template_dir`) that are not copied.
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            justfile: default_justfile(),
            readme: default_readme(),
            evaluate_command: default_evaluate_command(),
            include_private: false,
            mark_variable_users: false,
            template_dir: default_template_dir(),
            templatable_extensions: default_templatable_extensions(),
            ignore: default_ignore(),
        }
    }
}
