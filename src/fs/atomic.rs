//! Atomic file writes for rendered sources.
//!
//! A rendered source is never left half-written: content goes to a temporary
//! file in the target directory, is synced, and then renamed over the target.
//!
//! # Important Notes
//!
//! - The target directory must already exist; it is not created
//! - On crash, a temporary file may remain (named `.{filename}.tmp`)
//! - `std::fs::rename` replaces an existing target on both POSIX and Windows
//! - The replaced file's permissions are not carried over; the new file gets
//!   the default mode for a freshly created file
//! - A symlink at the target is replaced by a regular file, not written through

use crate::error::{LabError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, replacing any existing content.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(LabError::FileWrite)` - Missing directory, permission error, or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(write_error(
            path,
            format!("directory '{}' does not exist", parent.display()),
        ));
    }

    let temp_path = generate_temp_path(path)?;

    write_and_sync(path, &temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(path, format!("failed to replace file: {}", e))
    })?;

    sync_parent_dir(path);

    Ok(())
}

/// Persist the directory entry after a rename.
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

fn write_error(path: &Path, message: String) -> LabError {
    LabError::FileWrite {
        path: path.to_path_buf(),
        message,
    }
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| write_error(target, "invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| {
        write_error(
            target,
            format!(
                "failed to create temporary file '{}': {}",
                temp_path.display(),
                e
            ),
        )
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        write_error(target, format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(temp_path);
        write_error(target, format!("failed to sync temporary file: {}", e))
    })?;

    Ok(())
}
