//! Filesystem utilities.
//!
//! Atomic writes for README.md and templated files, plus the ignore-aware
//! tree copy used when stamping out a new project.

pub mod atomic;
mod copy_tree;

pub use atomic::atomic_write_file;
pub use copy_tree::{build_ignore_set, copy_tree};
