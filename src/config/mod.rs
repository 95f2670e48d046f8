//! Configuration model for boilerplate.
//!
//! This module defines the Config struct that represents `boilerplate.yaml`
//! at the repository root. The file is optional; every field has a default
//! and unknown fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


pub use model::Config;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "boilerplate.yaml";
