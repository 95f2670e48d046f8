//! Command implementations for boilerplate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod new;
mod reference;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{Error, Result};

/// Dispatch a command to its implementation.
///
/// The config is resolved once here so every command sees the same values.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::User(format!("failed to get current directory: {}", e)))?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!("resolved config:\n{}", config.to_yaml()?);
    }

    match cli.command {
        Command::Reference(args) => reference::cmd_reference(&config, args),
        Command::ShowTables => reference::cmd_show_tables(&config),
        Command::New(args) => new::cmd_new(&config, args),
    }
}
