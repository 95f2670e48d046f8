//! Error types for the boilerplate CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal: cosmetic parse
//! noise never reaches this type, it is logged and skipped where it occurs.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for boilerplate operations.
#[derive(Error, Debug)]
pub enum Error {
    /// User provided invalid arguments or the filesystem is in an unexpected state.
    #[error("{0}")]
    User(String),

    /// A sentinel block in the host document is corrupted (e.g. mismatched ids).
    #[error("Table markers are corrupted: {0}")]
    Structure(String),

    /// README tables are out of date (only raised by `reference --check`).
    #[error("{0}")]
    Stale(String),

    /// A spawned tool failed to start or exited with a non-zero status.
    #[error("{0}")]
    Tool(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    Git(String),

    /// Template application failed.
    #[error("Template failed in '{path}': {source}")]
    Template {
        /// The file being templated.
        path: String,
        /// What went wrong.
        #[source]
        source: TemplateError,
    },
}

impl Error {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::User(_) => exit_codes::USER_ERROR,
            Error::Structure(_) | Error::Stale(_) => exit_codes::CHECK_FAILURE,
            Error::Tool(_) | Error::Git(_) => exit_codes::TOOL_FAILURE,
            Error::Template { .. } => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

/// Result type alias for boilerplate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = Error::User("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn structure_and_stale_share_check_exit_code() {
        assert_eq!(
            Error::Structure("a != b".to_string()).exit_code(),
            exit_codes::CHECK_FAILURE
        );
        assert_eq!(
            Error::Stale("README.md".to_string()).exit_code(),
            exit_codes::CHECK_FAILURE
        );
    }

    #[test]
    fn tool_and_git_errors_have_tool_exit_code() {
        assert_eq!(
            Error::Tool("just failed".to_string()).exit_code(),
            exit_codes::TOOL_FAILURE
        );
        assert_eq!(
            Error::Git("commit failed".to_string()).exit_code(),
            exit_codes::TOOL_FAILURE
        );
    }

    #[test]
    fn template_error_names_file_and_key() {
        let err = Error::Template {
            path: "src/main.rs".to_string(),
            source: TemplateError::UndefinedVariable {
                name: "author".to_string(),
                known: vec!["authors".to_string()],
            },
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
        let msg = err.to_string();
        assert!(msg.contains("src/main.rs"));
        assert!(msg.contains("'author'"));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = Error::Structure("variables != commands".to_string());
        assert_eq!(
            err.to_string(),
            "Table markers are corrupted: variables != commands"
        );

        let err = Error::Git("init failed".to_string());
        assert_eq!(err.to_string(), "Git operation failed: init failed");
    }
}
