//! Project discovery across configured root directories.

use crate::error::Result;
use crate::project::Project;
use crate::vcs::{self, VcsKind};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan all roots for VCS-managed project directories.
///
/// Roots are walked in parallel as independent units of work and the
/// per-root results merged afterwards. The returned set is deduplicated by
/// project path (duplicate roots collapse) and iterates in listing order.
pub fn scan(roots: &[PathBuf], allowed: &[VcsKind]) -> Result<BTreeSet<Project>> {
    let sets: Vec<BTreeSet<Project>> = roots
        .par_iter()
        .map(|root| scan_root(root, allowed))
        .collect::<Result<_>>()?;

    let mut projects = BTreeSet::new();
    for set in sets {
        projects.extend(set);
    }
    tracing::debug!(count = projects.len(), "discovered projects");
    Ok(projects)
}

/// Depth-first walk of a single root.
///
/// A directory claimed by a VCS kind is recorded and its subtree skipped:
/// a VCS root is atomic, and nested working copies below it are never
/// examined. Directories that cannot be listed (permissions, races) are
/// skipped so partial visibility never turns into total failure.
fn scan_root(root: &Path, allowed: &[VcsKind]) -> Result<BTreeSet<Project>> {
    let mut projects = BTreeSet::new();

    let mut walker = WalkDir::new(root).follow_links(false).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if let Some(kind) = vcs::detect(entry.path(), allowed)? {
            tracing::debug!(path = %entry.path().display(), vcs = %kind, "found project");
            projects.insert(Project::new(entry.path().to_path_buf(), kind));
            walker.skip_current_dir();
        }
    }

    Ok(projects)
}
