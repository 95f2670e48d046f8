//! Applying the template engine to files on disk.

use super::{TemplateVars, apply_template_at};
use crate::error::{Error, Result};
use crate::fs::atomic_write_file;
use chrono::{DateTime, Local};
use std::path::Path;
use walkdir::WalkDir;

/// Check if a file's extension is in the (lowercase, dotless) allow-list.
pub fn is_templatable(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Template a single file in place.
///
/// The whole file is rendered in memory first; on error the file is left
/// exactly as it was.
pub fn template_file(path: &Path, vars: &TemplateVars, now: &DateTime<Local>) -> Result<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::User(format!(
            "failed to read template file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let rendered = apply_template_at(&text, vars, now).map_err(|source| Error::Template {
        path: path.display().to_string(),
        source,
    })?;

    if rendered != text {
        atomic_write_file(path, &rendered)?;
    }
    Ok(())
}

/// Template every allow-listed file under `root`, stopping at the first failure.
///
/// Returns the number of files processed.
pub fn template_tree(
    root: &Path,
    vars: &TemplateVars,
    extensions: &[String],
    now: &DateTime<Local>,
) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::User(format!("failed to walk '{}': {}", root.display(), e))
        })?;
        if !entry.file_type().is_file() || !is_templatable(entry.path(), extensions) {
            continue;
        }

        tracing::debug!(path = %entry.path().display(), "applying template");
        template_file(entry.path(), vars, now)?;
        count += 1;
    }

    Ok(count)
}
