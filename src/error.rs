//! Error types for the prjmgr CLI.
//!
//! "Already exists" and "not found" are not errors here; they are reported
//! as [`crate::orchestrator::Outcome`] values.

use crate::buildfile::Region;
use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for prjmgr operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Invalid argument, such as an artifact name containing a path separator.
    #[error("{0}")]
    UserError(String),

    /// `prjmgr.yaml` or the template file could not be parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// One or more anchor lines are absent from the build file.
    #[error("build file does not match the expected shape: missing {}", format_regions(.regions))]
    StructureNotFound { regions: Vec<Region> },

    /// A filesystem operation failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Some of the requested actions in a single invocation failed.
    #[error("{failed} of {total} requested actions failed")]
    ActionsFailed {
        failed: usize,
        total: usize,
        first: Box<ScaffoldError>,
    },
}

impl ScaffoldError {
    /// Build an [`ScaffoldError::Io`] for the given path.
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Shorthand for a single missing region.
    pub fn missing(region: Region) -> Self {
        ScaffoldError::StructureNotFound {
            regions: vec![region],
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserError(_) => exit_codes::USER_ERROR,
            ScaffoldError::Config(_) => exit_codes::USER_ERROR,
            ScaffoldError::StructureNotFound { .. } => exit_codes::STRUCTURE_FAILURE,
            ScaffoldError::Io { .. } => exit_codes::IO_FAILURE,
            ScaffoldError::ActionsFailed { first, .. } => first.exit_code(),
        }
    }
}

fn format_regions(regions: &[Region]) -> String {
    regions
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for prjmgr operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
