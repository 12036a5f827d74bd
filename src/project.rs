//! The project container type and its identity/ordering invariants.

use crate::status::WorkTreeStatus;
use crate::vcs::VcsKind;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// One discovered VCS-managed directory.
///
/// Identity is the `path` alone: two projects with the same path are the
/// same project regardless of transient attributes. Ordering is by `name`
/// ascending, tie-broken by `path` — the order used for listings and for
/// stable renumbering across filter iterations. Since `name` derives from
/// `path`, equality and ordering agree.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    path: PathBuf,
    vcs: VcsKind,
    status: Option<WorkTreeStatus>,
}

impl Project {
    /// Create a project for an absolute directory path owned by `vcs`.
    pub fn new(path: PathBuf, vcs: VcsKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            vcs,
            status: None,
        }
    }

    /// Last path segment of the project directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute, normalized project path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn vcs(&self) -> VcsKind {
        self.vcs
    }

    /// Working-tree status annotation, if one has been computed.
    pub fn status(&self) -> Option<WorkTreeStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: WorkTreeStatus) {
        self.status = Some(status);
    }

    /// Path for display, with the home directory shortened to `~`.
    ///
    /// Matching always runs against the absolute path; only listings use
    /// the short form.
    pub fn display_path(&self) -> String {
        if let Some(home) = dirs::home_dir() {
            if let Ok(rest) = self.path.strip_prefix(&home) {
                return if rest.as_os_str().is_empty() {
                    "~".to_string()
                } else {
                    format!("~/{}", rest.display())
                };
            }
        }
        self.path.display().to_string()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.vcs, self.display_path())
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.path.cmp(&other.path))
    }
}
