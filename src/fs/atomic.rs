//! Atomic file writes for the build file and generated artifacts.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `rename()` replaces the destination on both POSIX and Windows as long as
//! source and destination live on the same volume, which is guaranteed by
//! placing the temporary file next to the target. On crash a `.{filename}.tmp`
//! file may remain.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::io("replace", path, e)
    })?;

    sync_parent_dir(path);

    Ok(())
}

/// Persist the directory entry as well; failure here is not fatal.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary sibling path: `.{filename}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ScaffoldError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ScaffoldError::io("create", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(ScaffoldError::io("write", path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Makefile");

        atomic_write_file(&path, "all:\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "all:\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Makefile");
        fs::write(&path, "old content").unwrap();

        atomic_write_file(&path, "new content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drivers").join("inc").join("uart2.h");

        atomic_write_file(&path, "#ifndef UART2_H\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Makefile");

        atomic_write_file(&path, "OBJS = \\\n").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("Makefile")]);
    }

    #[test]
    fn test_generate_temp_path() {
        let temp = generate_temp_path(Path::new("/project/Makefile")).unwrap();
        assert_eq!(temp, PathBuf::from("/project/.Makefile.tmp"));
    }

    #[test]
    fn test_replacing_a_directory_reports_io() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the target makes the final rename fail.
        let path = temp_dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("child"), "x").unwrap();

        let err = atomic_write_file(&path, "data").unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
