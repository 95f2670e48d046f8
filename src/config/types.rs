//! Default value functions used by the Config struct.

pub fn default_justfile() -> String {
    "template/justfile".to_string()
}

pub fn default_readme() -> String {
    "README.md".to_string()
}

pub fn default_template_dir() -> String {
    "template".to_string()
}

pub fn default_evaluate_command() -> String {
    "just --evaluate".to_string()
}

/// Extensions (no leading dots) whose files get template processing.
pub fn default_templatable_extensions() -> Vec<String> {
    vec!["rs".to_string(), "toml".to_string()]
}

/// Paths under the template directory never copied into new projects.
pub fn default_ignore() -> Vec<String> {
    vec!["target".to_string(), ".git".to_string()]
}
