//! Creation and deletion of artifact files under the project root.

use super::{ArtifactKind, FileRole};
use crate::error::{Result, ScaffoldError};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and writes artifact files relative to a project root.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether every file of the artifact exists.
    pub fn exists(&self, kind: ArtifactKind, name: &str) -> bool {
        kind.paths(name)
            .files()
            .iter()
            .all(|(_, path)| self.root.join(path).exists())
    }

    /// Files of the artifact currently present on disk.
    pub fn existing(&self, kind: ArtifactKind, name: &str) -> Vec<(FileRole, PathBuf)> {
        kind.paths(name)
            .files()
            .into_iter()
            .filter(|(_, path)| self.root.join(path).exists())
            .map(|(role, path)| (role, path.to_path_buf()))
            .collect()
    }

    /// Write the artifact's missing files.
    ///
    /// `header` is ignored for kinds without a header file. Files already on
    /// disk are left untouched. Returns the project-relative paths written.
    pub fn write(
        &self,
        kind: ArtifactKind,
        name: &str,
        header: Option<&str>,
        source: &str,
    ) -> Result<Vec<(FileRole, PathBuf)>> {
        let mut written = Vec::new();

        for (role, path) in kind.paths(name).files() {
            let content = match role {
                FileRole::Header => match header {
                    Some(content) => content,
                    None => continue,
                },
                FileRole::Source => source,
            };

            let full_path = self.root.join(path);
            if full_path.exists() {
                debug!(path = %path.display(), "artifact file already present");
                continue;
            }

            atomic_write_file(&full_path, content)?;
            written.push((role, path.to_path_buf()));
        }

        Ok(written)
    }

    /// Delete whichever of the artifact's files exist. Returns the paths removed.
    pub fn delete(&self, kind: ArtifactKind, name: &str) -> Result<Vec<(FileRole, PathBuf)>> {
        let mut removed = Vec::new();

        for (role, path) in self.existing(kind, name) {
            let full_path = self.root.join(&path);
            std::fs::remove_file(&full_path)
                .map_err(|e| ScaffoldError::io("remove", &full_path, e))?;
            removed.push((role, path));
        }

        Ok(removed)
    }
}
