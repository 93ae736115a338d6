//! Artifact kinds and their on-disk layout.
//!
//! Every artifact maps to a fixed set of files relative to the project root:
//!
//! | Kind    | Header              | Source              |
//! |---------|---------------------|---------------------|
//! | driver  | `drivers/inc/<n>.h` | `drivers/src/<n>.c` |
//! | example | -                   | `src/<n>.c`         |
//! | bsp     | `bsp/<n>.h`         | `bsp/<n>.c`         |

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

mod store;

pub use store::ArtifactStore;

/// Names double as file stems and bare Makefile tokens.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid artifact name regex"));

/// The kinds of artifact prjmgr scaffolds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Driver,
    Example,
    Bsp,
}

impl ArtifactKind {
    /// Display label used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Driver => "Driver",
            ArtifactKind::Example => "Example",
            ArtifactKind::Bsp => "BSP",
        }
    }

    /// Project-relative file paths for `name`.
    pub fn paths(self, name: &str) -> ArtifactPaths {
        match self {
            ArtifactKind::Driver => ArtifactPaths {
                header: Some(Path::new("drivers/inc").join(format!("{}.h", name))),
                source: Path::new("drivers/src").join(format!("{}.c", name)),
            },
            ArtifactKind::Example => ArtifactPaths {
                header: None,
                source: Path::new("src").join(format!("{}.c", name)),
            },
            ArtifactKind::Bsp => ArtifactPaths {
                header: Some(Path::new("bsp").join(format!("{}.h", name))),
                source: Path::new("bsp").join(format!("{}.c", name)),
            },
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Driver => write!(f, "driver"),
            ArtifactKind::Example => write!(f, "example"),
            ArtifactKind::Bsp => write!(f, "bsp"),
        }
    }
}

/// Which of an artifact's files a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Header,
    Source,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Header => write!(f, "header"),
            FileRole::Source => write!(f, "source"),
        }
    }
}

/// Project-relative files belonging to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub header: Option<PathBuf>,
    pub source: PathBuf,
}

impl ArtifactPaths {
    /// Header first (when the kind has one), then source.
    pub fn files(&self) -> Vec<(FileRole, &Path)> {
        let mut files = Vec::with_capacity(2);
        if let Some(header) = &self.header {
            files.push((FileRole::Header, header.as_path()));
        }
        files.push((FileRole::Source, self.source.as_path()));
        files
    }
}

/// Check that `name` can be used as a file stem and Makefile token.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::UserError(
            "artifact name must not be empty".to_string(),
        ));
    }

    if !NAME_REGEX.is_match(name) {
        return Err(ScaffoldError::UserError(format!(
            "invalid artifact name '{}': use only letters, digits, '_' or '-'",
            name
        )));
    }

    Ok(())
}
