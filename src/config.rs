//! Configuration loading and validation.
//!
//! The config file names the project root directories to scan and the VCS
//! kinds to recognize. Both are path-separator-delimited ordered lists, so
//! a config carries over directly from `$PATH`-style environment habits:
//!
//! ```toml
//! [search]
//! roots = "~/dev:~/work"
//! vcs = "git:hg"
//! ```

use crate::error::{ConfigError, Result};
use crate::vcs::VcsKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Project root directories, path-separator-delimited
    pub roots: String,
    /// VCS kinds to recognize, path-separator-delimited
    pub vcs: String,
}

impl Config {
    /// Load configuration from the given path, or the default location.
    ///
    /// The file is required either way: without configured roots there is
    /// nothing to scan.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError { path, source })?;

        Ok(config)
    }

    /// Default config location: `~/.config/devjump/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| ConfigError::Invalid("cannot determine config directory".into()))?;
        Ok(base.join("devjump").join("config.toml"))
    }

    /// Expanded and validated root directories, in configured order.
    ///
    /// Empty entries are ignored; every remaining entry must name an
    /// existing directory. Canonicalization makes the paths absolute so
    /// duplicate roots collapse later by path identity.
    pub fn roots(&self) -> Result<Vec<PathBuf>> {
        let mut roots = Vec::new();
        for entry in std::env::split_paths(&self.search.roots) {
            if entry.as_os_str().is_empty() {
                continue;
            }
            let expanded = expand_tilde(&entry);
            let root = expanded
                .canonicalize()
                .map_err(|_| ConfigError::InvalidRoot(expanded.clone()))?;
            if !root.is_dir() {
                return Err(ConfigError::InvalidRoot(root).into());
            }
            roots.push(root);
        }
        tracing::debug!(?roots, "configured roots");
        Ok(roots)
    }

    /// Allowed VCS kinds, in configured order.
    ///
    /// Unknown names fail here, before any scanning starts.
    pub fn vcs_kinds(&self) -> Result<Vec<VcsKind>> {
        let mut kinds = Vec::new();
        for name in self.search.vcs.split(PATH_SEPARATOR) {
            if name.is_empty() {
                continue;
            }
            let kind: VcsKind = name.parse()?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        tracing::debug!(?kinds, "allowed VCS kinds");
        Ok(kinds)
    }
}

#[cfg(unix)]
const PATH_SEPARATOR: char = ':';
#[cfg(not(unix))]
const PATH_SEPARATOR: char = ';';

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
