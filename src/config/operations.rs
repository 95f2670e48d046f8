//! Config loading, validation, and utility operations.

use super::CONFIG_FILE_NAME;
use super::model::Config;
use crate::error::{Error, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::User(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Otherwise `boilerplate.yaml` in `cwd` is
    /// used when present, and the defaults when it is not.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = cwd.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            Self::load(implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| Error::User(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::User(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `evaluate_command` must split into at least one word
    /// - `templatable_extensions` entries must be non-empty, without leading dots
    pub fn validate(&self) -> Result<()> {
        self.evaluate_argv()?;

        for ext in &self.templatable_extensions {
            if ext.is_empty() {
                return Err(Error::User(
                    "config validation failed: templatable_extensions entries must be non-empty"
                        .to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(Error::User(format!(
                    "config validation failed: templatable_extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Split `evaluate_command` into argv.
    pub fn evaluate_argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.evaluate_command).map_err(|e| {
            Error::User(format!(
                "failed to parse evaluate_command: {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
                e, self.evaluate_command
            ))
        })?;

        if argv.is_empty() {
            return Err(Error::User(
                "config validation failed: evaluate_command must not be empty".to_string(),
            ));
        }
        Ok(argv)
    }

    /// Get templatable_extensions normalized to lowercase.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.templatable_extensions
            .iter()
            .map(|s| s.to_lowercase())
            .collect()
    }
}
