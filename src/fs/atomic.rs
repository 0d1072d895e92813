//! Atomic file writes.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows. Source and destination share a directory, so they are always on
//! the same filesystem. On crash, a `.{filename}.tmp` file may remain.
//!
//! A symlinked target is written through: the temp file lives next to the
//! file the link points at, and the link itself is left in place. The
//! target's permission bits are carried over to the replacement.

use crate::error::{ConfigError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating its parent directory if needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let target = resolve_target(path.as_ref())?;
    let path = target.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigError::IoFailure(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    copy_permissions(path, &temp_path)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// The file actually written: symlinks are followed, new paths are kept as is.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(path.to_path_buf());
    }

    fs::canonicalize(path).map_err(|e| {
        ConfigError::IoFailure(format!(
            "failed to resolve config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Give the temp file the mode of the file it is about to replace.
fn copy_permissions(target: &Path, temp_path: &Path) -> Result<()> {
    let Ok(meta) = fs::metadata(target) else {
        return Ok(());
    };

    fs::set_permissions(temp_path, meta.permissions()).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        ConfigError::IoFailure(format!(
            "failed to copy permissions of '{}': {}",
            target.display(),
            e
        ))
    })
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ConfigError::IoFailure(format!("invalid config file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConfigError::IoFailure(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        ConfigError::IoFailure(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        ConfigError::IoFailure(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ConfigError::IoFailure(format!(
            "failed to write config file '{}': {}",
            target.display(),
            e
        ))
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry as well.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
