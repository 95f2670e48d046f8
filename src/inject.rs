//! Injecting rendered tables into README.md.
//!
//! The document owns everything except the interiors of sentinel blocks:
//!
//! ```text
//! <!-- BEGIN TABLE: commands -->
//! ...replaced on every run...
//! <!-- END TABLE: commands -->
//! ```
//!
//! The older `BEGIN JUSTFILE TABLE` spelling is also recognized. Marker lines
//! and the blank lines hugging them are preserved byte-for-byte.

use crate::error::{Error, Result};
use crate::fs::atomic_write_file;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)(?P<tag_start><!-- BEGIN (?:JUSTFILE )?TABLE: (?P<tid_start>\S+) -->\n*)",
        r"(?P<content>.*?)",
        r"(?P<tag_end>\n*<!-- END (?:JUSTFILE )?TABLE: (?P<tid_end>\S+) -->)",
    ))
    .expect("valid sentinel block regex")
});

/// Replace the interior of every sentinel block that has rendered content.
///
/// Blocks with an identifier missing from `rendered` are left untouched.
/// Fails without producing output if any block's BEGIN and END identifiers
/// differ.
pub fn inject(document: &str, rendered: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(document.len());
    let mut last = 0;
    let mut seen = HashSet::new();

    for caps in BLOCK_RE.captures_iter(document) {
        let whole = caps.get(0).expect("group 0 always present");
        let tid_start = &caps["tid_start"];
        let tid_end = &caps["tid_end"];

        if tid_start != tid_end {
            return Err(Error::Structure(format!(
                "BEGIN TABLE '{}' is closed by END TABLE '{}'",
                tid_start, tid_end
            )));
        }

        out.push_str(&document[last..whole.start()]);
        match rendered.get(tid_start) {
            Some(content) => {
                out.push_str(&caps["tag_start"]);
                out.push_str(content);
                out.push_str(&caps["tag_end"]);
                seen.insert(tid_start.to_string());
            }
            None => {
                tracing::debug!(id = tid_start, "no rendered content for table block");
                out.push_str(whole.as_str());
            }
        }
        last = whole.end();
    }
    out.push_str(&document[last..]);

    for id in rendered.keys().filter(|id| !seen.contains(*id)) {
        tracing::info!(id = %id, "no table block in document for rendered table");
    }

    Ok(out)
}

/// Inject into the file at `path`, rewriting it atomically if anything changed.
///
/// Returns `true` if the file was rewritten.
pub fn update_file(path: &Path, rendered: &HashMap<String, String>) -> Result<bool> {
    let (current, updated) = preview_file(path, rendered)?;
    if current == updated {
        return Ok(false);
    }

    atomic_write_file(path, &updated)?;
    Ok(true)
}

/// Read `path` and compute its injected form without writing anything.
///
/// Returns `(current, updated)`.
pub fn preview_file(path: &Path, rendered: &HashMap<String, String>) -> Result<(String, String)> {
    let current = std::fs::read_to_string(path).map_err(|e| {
        Error::User(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let updated = inject(&current, rendered)?;
    Ok((current, updated))
}
