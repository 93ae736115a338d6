//! Build file (Makefile) model for prjmgr.
//!
//! The build file is kept as an ordered sequence of lines. There is no
//! Makefile parser: every edit locates its region by line-prefix or
//! exact-line matching, driven by a [`BuildFileLayout`]. The regions that
//! prjmgr keeps in sync are:
//!
//! - the compiled-object list (`OBJS = \`)
//! - the three target filename variables (`TARGET_LST`, `TARGET_HEX`, `TARGET_ELF`)
//! - the default target's dependency list (`all: \`)
//! - the "Build complete" summary echo block
//! - one recipe block per example (`# Example: <name>` .. `# End example: <name>`)
//!
//! # Round trip
//!
//! Parsing and re-serializing an unmodified file reproduces it byte for byte,
//! including CRLF line endings and the presence or absence of a final newline.

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::ops::Range;
use std::path::Path;

mod layout;
mod objects;
mod targets;

pub use layout::BuildFileLayout;
pub use targets::EditReport;

/// Named regions of the build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ObjectList,
    TargetVars,
    DependencyList,
    SummaryBlock,
    RecipeBlock,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::ObjectList => write!(f, "object list"),
            Region::TargetVars => write!(f, "target variables"),
            Region::DependencyList => write!(f, "default target dependency list"),
            Region::SummaryBlock => write!(f, "build summary block"),
            Region::RecipeBlock => write!(f, "example recipe anchor"),
        }
    }
}

/// An in-memory build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    lines: Vec<String>,
    trailing_newline: bool,
    crlf: bool,
}

impl BuildFile {
    /// Split file content into lines.
    ///
    /// Lines keep any `\r` so that re-joining on `\n` is exact; `crlf` only
    /// decides the ending given to newly inserted lines.
    pub fn parse(content: &str) -> Self {
        let trailing_newline = content.ends_with('\n');
        let body = if trailing_newline {
            &content[..content.len() - 1]
        } else {
            content
        };

        let lines: Vec<String> = if content.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(str::to_string).collect()
        };
        let crlf = lines.first().is_some_and(|l| l.ends_with('\r'));

        Self {
            lines,
            trailing_newline,
            crlf,
        }
    }

    /// Load a build file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::io("read", path, e))?;
        Ok(Self::parse(&content))
    }

    /// Atomically save the build file to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::fs::atomic_write_file(path, &self.to_string())
    }

    /// All lines, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line at or after `from` whose trimmed content starts with `prefix`.
    pub fn find_prefix(&self, prefix: &str, from: usize) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, line)| line.trim().starts_with(prefix))
            .map(|(i, _)| i)
    }

    /// Index of the first line whose trimmed content equals `expected` (trimmed).
    pub fn find_exact(&self, expected: &str) -> Option<usize> {
        let expected = expected.trim();
        self.lines.iter().position(|line| line.trim() == expected)
    }

    /// Insert `new_lines` so that the first one lands right after `index`.
    pub fn insert_after(&mut self, index: usize, new_lines: Vec<String>) {
        self.insert_at(index + 1, new_lines);
    }

    /// Insert `new_lines` so that the last one lands right before `index`.
    pub fn insert_before(&mut self, index: usize, new_lines: Vec<String>) {
        self.insert_at(index, new_lines);
    }

    fn insert_at(&mut self, at: usize, new_lines: Vec<String>) {
        let at = at.min(self.lines.len());
        let crlf = self.crlf;
        let new_lines = new_lines.into_iter().map(|line| {
            if crlf && !line.ends_with('\r') {
                format!("{}\r", line)
            } else {
                line
            }
        });
        self.lines.splice(at..at, new_lines);
    }

    /// Replace the line at `index`, keeping the file's line ending.
    pub fn replace_line(&mut self, index: usize, line: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = if self.crlf && !line.ends_with('\r') {
                format!("{}\r", line)
            } else {
                line
            };
        }
    }

    /// Delete the lines in `range` (clamped to the file length).
    pub fn remove_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        self.lines.drain(start..end);
    }

    /// Delete every line whose trimmed content equals `expected` (trimmed).
    ///
    /// Returns the number of lines removed.
    pub fn remove_exact(&mut self, expected: &str) -> usize {
        let expected = expected.trim();
        let before = self.lines.len();
        self.lines.retain(|line| line.trim() != expected);
        before - self.lines.len()
    }
}

impl fmt::Display for BuildFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))?;
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}
