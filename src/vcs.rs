//! VCS kind enumeration and per-directory marker detection.

use crate::error::{ConfigError, JumpError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported version control systems.
///
/// Each kind owns a fixed marker entry directly inside a project's root
/// directory. Marker presence alone is authoritative; contents are never
/// inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VcsKind {
    Git,
    Svn,
    Hg,
    Cvs,
}

impl VcsKind {
    /// All supported kinds, in canonical order.
    pub const ALL: [VcsKind; 4] = [VcsKind::Git, VcsKind::Svn, VcsKind::Hg, VcsKind::Cvs];

    /// Configuration name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Svn => "svn",
            VcsKind::Hg => "hg",
            VcsKind::Cvs => "cvs",
        }
    }

    /// Marker directory name indicating a project root of this kind.
    ///
    /// CVS is the odd one out: its marker is an uppercase `CVS` directory
    /// rather than a dot-name.
    pub fn marker(&self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Svn => ".svn",
            VcsKind::Hg => ".hg",
            VcsKind::Cvs => "CVS",
        }
    }

    /// Check whether this kind's marker is present in `dir`.
    pub fn marks(&self, dir: &Path) -> bool {
        dir.join(self.marker()).is_dir()
    }

    /// Comma-separated list of supported names, for error messages.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for VcsKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "git" => Ok(VcsKind::Git),
            "svn" => Ok(VcsKind::Svn),
            "hg" => Ok(VcsKind::Hg),
            "cvs" => Ok(VcsKind::Cvs),
            other => Err(ConfigError::UnsupportedVcs {
                name: other.to_string(),
                supported: VcsKind::supported_names(),
            }),
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Report which allowed kind (if any) owns `dir`.
///
/// Only kinds in `allowed` are probed. Markers for two or more allowed
/// kinds in the same directory are unrepresentable in the data model and
/// abort the run.
pub fn detect(dir: &Path, allowed: &[VcsKind]) -> Result<Option<VcsKind>> {
    let mut found = None;
    for kind in allowed {
        if kind.marks(dir) {
            if found.is_some() {
                return Err(JumpError::AmbiguousVcs {
                    path: dir.to_path_buf(),
                });
            }
            found = Some(*kind);
        }
    }
    Ok(found)
}
