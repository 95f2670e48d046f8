//! Copying the template tree into a new project directory.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Compile ignore patterns (relative to the template root, `/`-separated).
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim().trim_start_matches('/').replace('\\', "/");
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(&normalized).map_err(|e| {
            Error::User(format!("invalid glob pattern in ignore: '{}' - {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| Error::User(format!("failed to compile ignore globs: {}", e)))
}

/// Recursively copy `source` into `destination`, skipping ignored paths.
///
/// An ignored directory prunes its whole subtree. Symlinks are not followed
/// and are skipped. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path, ignore: &GlobSet) -> Result<usize> {
    let mut count = 0;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let ignored = entry
                .path()
                .strip_prefix(source)
                .map(|rel| ignore.is_match(normalize(rel)))
                .unwrap_or(false);
            if ignored {
                tracing::debug!(path = %entry.path().display(), "skipping ignored path");
            }
            !ignored
        });

    fs::create_dir_all(destination).map_err(|e| {
        Error::User(format!(
            "failed to create directory '{}': {}",
            destination.display(),
            e
        ))
    })?;

    for entry in walker {
        let entry = entry
            .map_err(|e| Error::User(format!("failed to walk '{}': {}", source.display(), e)))?;
        let rel = entry.path().strip_prefix(source).map_err(|e| {
            Error::User(format!(
                "unexpected path '{}' outside '{}': {}",
                entry.path().display(),
                source.display(),
                e
            ))
        })?;
        let target = destination.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                Error::User(format!(
                    "failed to create directory '{}': {}",
                    target.display(),
                    e
                ))
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(|e| {
                Error::User(format!(
                    "failed to copy '{}' to '{}': {}",
                    entry.path().display(),
                    target.display(),
                    e
                ))
            })?;
            count += 1;
        }
    }

    Ok(count)
}

fn normalize(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}
