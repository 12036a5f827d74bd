//! Interactive filter/select loop.
//!
//! Resolution is an explicit state machine over a narrowing candidate set:
//!
//! ```text
//! Filtering --0 matches--> fatal NoMatch
//! Filtering --1 match---> Resolved
//! Filtering --n matches-> Listing --list-only--> Listed
//! Listing -> AwaitingInput --index in range--> Resolved
//! AwaitingInput --other line--> Filtering (over the current matches)
//! AwaitingInput --end of input--> Aborted
//! ```
//!
//! Re-filtering restricts the candidate universe to the current match set,
//! so each iteration narrows; an index answer short-circuits without
//! another filter pass.

use crate::error::{JumpError, Result};
use crate::project::Project;
use colored::Colorize;
use regex::Regex;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Outcome of a resolution session that did not fail.
#[derive(Debug)]
pub enum Resolution {
    /// Exactly one project was resolved, by auto-select or by the user.
    Chosen(Project),
    /// List-only mode: matches were printed, nothing was selected.
    Listed,
}

/// Behavior switches for a resolution session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOptions {
    /// Print the match listing and stop; never prompt, never resolve.
    pub list_only: bool,
    /// Color the `[vcs]` cell by working-tree status where known.
    pub color_status: bool,
}

enum State {
    Filtering,
    Listing,
    AwaitingInput,
}

/// Drives one resolution session over injected input/output handles.
///
/// The handles are passed in at construction so sessions are scriptable in
/// tests; `main` hands in locked stdin/stdout.
pub struct Selector<R, W> {
    input: R,
    output: W,
    options: SelectOptions,
}

impl<R: BufRead, W: Write> Selector<R, W> {
    pub fn new(input: R, output: W, options: SelectOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Resolve `projects` down to a single choice, starting from
    /// `initial_pattern`.
    ///
    /// An empty pattern matches everything. A pattern that fails to
    /// compile is fatal for the whole run, whether it is the initial one
    /// or a re-entered one.
    pub fn resolve(mut self, projects: Vec<Project>, initial_pattern: &str) -> Result<Resolution> {
        let mut candidates = projects;
        candidates.sort();

        let mut pattern = initial_pattern.to_string();
        let mut matched: Vec<Project> = Vec::new();
        let mut state = State::Filtering;

        loop {
            state = match state {
                State::Filtering => {
                    matched = filter(std::mem::take(&mut candidates), &pattern)?;
                    match matched.len() {
                        0 => return Err(JumpError::NoMatch { pattern }),
                        1 => return Ok(Resolution::Chosen(matched.remove(0))),
                        _ => State::Listing,
                    }
                }
                State::Listing => {
                    self.render(&matched)?;
                    if self.options.list_only {
                        return Ok(Resolution::Listed);
                    }
                    State::AwaitingInput
                }
                State::AwaitingInput => {
                    let line = self.prompt()?;
                    match parse_index(&line, matched.len()) {
                        Some(index) => {
                            return Ok(Resolution::Chosen(matched.remove(index - 1)));
                        }
                        None => {
                            // Anything that isn't a listed index is the
                            // next pattern, applied to the current match
                            // set rather than the original pool.
                            tracing::debug!(pattern = %line, "re-filtering");
                            pattern = line;
                            candidates = std::mem::take(&mut matched);
                            State::Filtering
                        }
                    }
                }
            };
        }
    }

    /// Render the aligned match listing.
    ///
    /// Four left-aligned columns (index, name, bracketed kind, path), each
    /// padded to the widest value in the current match set. Widths are
    /// recomputed per iteration so they shrink as the set narrows. The kind
    /// cell is padded by its plain width, since coloring inserts invisible
    /// escape codes.
    fn render(&mut self, matched: &[Project]) -> Result<()> {
        let index_width = matched.len().to_string().len();
        let name_width = column_width(matched, |p| p.name().len());
        let vcs_width = column_width(matched, |p| p.vcs().name().len());
        let path_width = column_width(matched, |p| p.display_path().len());
        tracing::debug!(index_width, name_width, vcs_width, path_width, "column widths");

        for (i, project) in matched.iter().enumerate() {
            let vcs = project.vcs().name();
            let vcs_pad = " ".repeat(vcs_width - vcs.len());
            let vcs_cell = self.vcs_cell(project);
            writeln!(
                self.output,
                "{index:<index_width$} : {name:<name_width$} [{vcs_cell}]{vcs_pad} {path:<path_width$}",
                index = i + 1,
                name = project.name(),
                path = project.display_path(),
            )
            .map_err(stream_error)?;
        }
        self.output.flush().map_err(stream_error)?;
        Ok(())
    }

    fn vcs_cell(&self, project: &Project) -> String {
        let name = project.vcs().name();
        if self.options.color_status {
            if let Some(color) = project.status().and_then(|s| s.color()) {
                return name.color(color).bold().to_string();
            }
        }
        name.to_string()
    }

    /// Prompt for one line of input. End-of-input aborts the session.
    fn prompt(&mut self) -> Result<String> {
        write!(self.output, "selection: ").map_err(stream_error)?;
        self.output.flush().map_err(stream_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|_| JumpError::InputAborted)?;
        if read == 0 {
            return Err(JumpError::InputAborted);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        tracing::debug!(line, "selection input");
        Ok(line)
    }
}

/// Apply `pattern` to the candidates, keeping listing order.
///
/// A project passes if the regex matches its absolute path or its VCS kind
/// name. Every decision is observable on the diagnostic channel.
fn filter(candidates: Vec<Project>, pattern: &str) -> Result<Vec<Project>> {
    let regex = Regex::new(pattern).map_err(|source| JumpError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matched = Vec::new();
    for project in candidates {
        let path = project.path().to_string_lossy();
        if regex.is_match(&path) || regex.is_match(project.vcs().name()) {
            tracing::debug!(%project, "passed");
            matched.push(project);
        } else {
            tracing::debug!(%project, "failed");
        }
    }
    tracing::debug!(count = matched.len(), "filtered candidates");
    Ok(matched)
}

/// Interpret an input line as a 1-based listing index, if it is one.
fn parse_index(line: &str, count: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(index) if (1..=count).contains(&index) => Some(index),
        _ => None,
    }
}

fn column_width(matched: &[Project], field: impl Fn(&Project) -> usize) -> usize {
    matched.iter().map(field).max().unwrap_or(0)
}

fn stream_error(source: std::io::Error) -> JumpError {
    JumpError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
