//! The selection artifact: the single piece of persisted state.
//!
//! One text file holds the absolute path of the last chosen project plus a
//! trailing newline. A shell wrapper reads it and changes directory; this
//! tool never changes directory itself. The file is fully overwritten on
//! each successful run and is scoped to the invoking user, so users on a
//! shared host do not collide. Concurrent runs by the same user race
//! last-writer-wins.

use crate::error::{JumpError, Result};
use crate::project::Project;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the artifact location.
pub const STATE_ENV: &str = "DEVJUMP_STATE";

/// Writer (and reader) of the selection artifact.
#[derive(Debug, Clone)]
pub struct SelectionSink {
    path: PathBuf,
}

impl SelectionSink {
    /// Artifact at the conventional per-user location.
    ///
    /// `$DEVJUMP_STATE` overrides the path wholesale; otherwise it is
    /// `/tmp/.devjump_<user>`, with `<user>` from `$USER` then `$LOGNAME`.
    pub fn from_env() -> Self {
        let path = std::env::var_os(STATE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let user = std::env::var("USER")
                    .or_else(|_| std::env::var("LOGNAME"))
                    .unwrap_or_else(|_| "unknown".to_string());
                PathBuf::from(format!("/tmp/.devjump_{user}"))
            });
        Self { path }
    }

    /// Artifact at an explicit location.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the resolved project, unless this is a listing-only run.
    ///
    /// Returns whether the selection was committed. In list-only mode the
    /// project line is echoed instead and nothing is written. Write
    /// failures propagate; they are never swallowed.
    pub fn commit(&self, project: &Project, list_only: bool) -> Result<bool> {
        if list_only {
            println!("{project}");
            return Ok(false);
        }

        let contents = format!("{}\n", project.path().display());
        fs::write(&self.path, contents).map_err(|source| JumpError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(artifact = %self.path.display(), project = %project.path().display(), "committed selection");
        Ok(true)
    }

    /// Path stored by the previous run, for `--previous`.
    pub fn previous(&self) -> Result<PathBuf> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(PathBuf::from(contents.trim_end())),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(JumpError::NoPrevious)
            }
            Err(source) => Err(JumpError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::VcsKind;
    use tempfile::TempDir;

    fn project(path: &str) -> Project {
        Project::new(PathBuf::from(path), VcsKind::Git)
    }

    #[test]
    fn commit_overwrites_with_path_and_newline() {
        let tmp = TempDir::new().unwrap();
        let sink = SelectionSink::at(tmp.path().join("state"));

        assert!(sink.commit(&project("/roots/first"), false).unwrap());
        assert!(sink.commit(&project("/roots/second"), false).unwrap());

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "/roots/second\n");
    }

    #[test]
    fn list_only_never_writes() {
        let tmp = TempDir::new().unwrap();
        let sink = SelectionSink::at(tmp.path().join("state"));

        let committed = sink.commit(&project("/roots/app"), true).unwrap();

        assert!(!committed);
        assert!(!sink.path().exists());
    }

    #[test]
    fn write_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        // Parent directory does not exist.
        let sink = SelectionSink::at(tmp.path().join("missing/state"));

        let err = sink.commit(&project("/roots/app"), false).unwrap_err();
        assert!(matches!(err, JumpError::Io { .. }));
    }

    #[test]
    fn previous_round_trips() {
        let tmp = TempDir::new().unwrap();
        let sink = SelectionSink::at(tmp.path().join("state"));

        sink.commit(&project("/roots/app"), false).unwrap();

        assert_eq!(sink.previous().unwrap(), PathBuf::from("/roots/app"));
    }

    #[test]
    fn previous_without_artifact_fails() {
        let tmp = TempDir::new().unwrap();
        let sink = SelectionSink::at(tmp.path().join("state"));

        assert!(matches!(sink.previous(), Err(JumpError::NoPrevious)));
    }
}
