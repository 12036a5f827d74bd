//! Working-tree status probing for listed projects.
//!
//! Cosmetic annotation only: status never affects project identity,
//! ordering, matching, or the committed selection.

use crate::vcs::VcsKind;
use colored::Color;
use std::path::Path;
use std::process::{Command, Stdio};

/// Working-tree state of a project, as far as a quick probe can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkTreeStatus {
    /// Nothing staged, nothing modified.
    Clean,
    /// Staged changes only.
    Staged,
    /// Unstaged modifications present.
    Dirty,
    /// Unsupported kind or probe failure.
    Unknown,
}

impl WorkTreeStatus {
    /// Color used for the `[vcs]` cell in listings.
    pub fn color(&self) -> Option<Color> {
        match self {
            WorkTreeStatus::Clean => Some(Color::Green),
            WorkTreeStatus::Staged => Some(Color::Yellow),
            WorkTreeStatus::Dirty => Some(Color::Red),
            WorkTreeStatus::Unknown => None,
        }
    }
}

/// Probe the working-tree status of the project at `path`.
///
/// Only git is supported; other kinds report `Unknown` without spawning
/// anything. Probe failures (no git binary, corrupt repository, no HEAD)
/// also degrade to `Unknown`.
pub fn status_of(path: &Path, vcs: VcsKind) -> WorkTreeStatus {
    if vcs != VcsKind::Git {
        return WorkTreeStatus::Unknown;
    }

    let unstaged = match git_quiet(path, &["diff-files", "--quiet"]) {
        Some(clean) => !clean,
        None => return WorkTreeStatus::Unknown,
    };
    if unstaged {
        tracing::debug!(path = %path.display(), "working tree is dirty");
        return WorkTreeStatus::Dirty;
    }

    let staged = match git_quiet(path, &["diff-index", "--quiet", "--cached", "HEAD"]) {
        Some(clean) => !clean,
        None => return WorkTreeStatus::Unknown,
    };
    if staged {
        tracing::debug!(path = %path.display(), "working tree has staged changes");
        WorkTreeStatus::Staged
    } else {
        tracing::debug!(path = %path.display(), "working tree is clean");
        WorkTreeStatus::Clean
    }
}

/// Run git in `dir`, reporting `Some(true)` on exit 0, `Some(false)` on
/// exit 1 (differences found), and `None` otherwise. git signals usage and
/// repository errors with other codes (128), which must not read as dirty.
fn git_quiet(dir: &Path, args: &[&str]) -> Option<bool> {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .ok()?;
    match status.code() {
        Some(0) => Some(true),
        Some(1) => Some(false),
        _ => None,
    }
}
