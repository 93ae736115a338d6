//! Project root and configuration resolution for prjmgr.
//!
//! Commands never assume the current directory is the project root. The
//! root is taken from `--root` when given; otherwise the nearest ancestor
//! holding `prjmgr.yaml` wins, then the nearest ancestor holding a
//! `Makefile`, and finally the current directory itself.

use crate::artifact::ArtifactStore;
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = "prjmgr.yaml";

/// Build file name used to recognize a project root without a config file.
pub const DEFAULT_BUILD_FILE_NAME: &str = "Makefile";

/// Resolved project root plus its loaded configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub root: PathBuf,

    /// Configuration loaded from `prjmgr.yaml`, or defaults.
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the project from an explicit root or the current working directory.
    pub fn resolve(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(root) => Self::from_root(root),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    ScaffoldError::UserError(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?;
                Self::resolve_from(&cwd)
            }
        }
    }

    /// Search upward from `start` for the project root.
    pub fn resolve_from<P: AsRef<Path>>(start: P) -> Result<Self> {
        let start = start.as_ref();
        let root = find_ancestor_with(start, CONFIG_FILE_NAME)
            .or_else(|| find_ancestor_with(start, DEFAULT_BUILD_FILE_NAME))
            .unwrap_or_else(|| start.to_path_buf());

        Self::from_root(&root)
    }

    /// Use `root` as the project root as-is.
    pub fn from_root(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(ScaffoldError::UserError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }

        let root = root
            .canonicalize()
            .map_err(|e| ScaffoldError::io("resolve", root, e))?;
        let config = Config::load(root.join(CONFIG_FILE_NAME))?;
        debug!(root = %root.display(), "resolved project root");

        Ok(Self { root, config })
    }

    /// Path to the config file (which may not exist).
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Path to the build file.
    pub fn build_file_path(&self) -> PathBuf {
        self.root.join(&self.config.build_file)
    }

    /// Path to the template file.
    pub fn templates_path(&self) -> PathBuf {
        self.root.join(&self.config.templates_file)
    }

    /// Artifact store rooted at the project root.
    pub fn store(&self) -> ArtifactStore {
        ArtifactStore::new(&self.root)
    }
}

fn find_ancestor_with(start: &Path, file_name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(file_name).is_file())
        .map(Path::to_path_buf)
}
