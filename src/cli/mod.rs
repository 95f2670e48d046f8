//! CLI argument parsing for boilerplate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Boilerplate: keep the template's justfile reference current and stamp out
/// new projects from the template.
#[derive(Parser, Debug)]
#[command(name = "boilerplate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase the verbosity. Repeat for extra effect.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease the verbosity. Repeat for extra effect.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Config file to use instead of ./boilerplate.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for boilerplate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate the justfile reference tables in the README.
    ///
    /// Parses the justfile, asks `just` for the evaluated variable values,
    /// renders HTML tables and rewrites the README's table blocks in place.
    Reference(ReferenceArgs),

    /// Print the rendered justfile tables to stdout.
    ShowTables,

    /// Create new projects from the template.
    ///
    /// Copies the template directory, fills in the template variables,
    /// and initializes a fresh git history in each destination.
    New(NewArgs),
}

/// Arguments for the `reference` command.
#[derive(Parser, Debug)]
pub struct ReferenceArgs {
    /// Only report whether the README is current; never write it.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Paths for the new project directories. Prompts when omitted.
    #[arg(value_name = "DESTDIR")]
    pub destdirs: Vec<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
