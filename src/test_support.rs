use std::fs;
use std::path::Path;
use std::process::Command;

/// A justfile exercising groups, private variables, quiet recipes and bodies.
pub(crate) const SAMPLE_JUSTFILE: &str = "\
# Target triple for release builds
export CARGO_BUILD_TARGET = \"i686-unknown-linux-musl\"
# Internal package name
_pkgname = \"app\"

# --- Local installation ---
# Where `install` puts the binary
INSTALL_DIR = \"~/.local/bin\"
# Extra **features** to enable
features = \"\"

# Build in dev mode
build +args=\"\":
\tcargo build {{args}}

# Alias for `cargo check`
check:
\tcargo check

# -- Release Builds --

# Build a release binary
build-release: (build \"--release\")

# Install the release binary
install: build-release
\tcp target/release/app \"$INSTALL_DIR\"

@kcachegrind +args=\"\":
\techo nothing to see
";

/// A README with both sentinel blocks, holding stale content.
pub(crate) const SAMPLE_README: &str = "\
# Project

## Variables

<!-- BEGIN TABLE: variables -->
old variables
<!-- END TABLE: variables -->

## Commands

<!-- BEGIN JUSTFILE TABLE: commands -->

old commands

<!-- END JUSTFILE TABLE: commands -->

Trailing prose.
";

/// Write `(relative path, content)` pairs under `root`, creating directories.
pub(crate) fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Commit identity for git children, so commits work without any user config.
pub(crate) const TEST_GIT_IDENTITY: &[(&str, &str)] = &[
    ("GIT_AUTHOR_NAME", "Test User"),
    ("GIT_AUTHOR_EMAIL", "test@example.com"),
    ("GIT_COMMITTER_NAME", "Test User"),
    ("GIT_COMMITTER_EMAIL", "test@example.com"),
];

/// Hide the global and system git config from a git child.
#[cfg(unix)]
pub(crate) const ISOLATED_GIT_CONFIG: &[(&str, &str)] = &[
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
];

/// `git init` with a repo-local identity so commits work on bare CI machines.
pub(crate) fn init_repo_with_identity(path: &Path) {
    git(path, &["init", "-q"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

/// Run git in `repo_dir`, panicking with its output on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}
