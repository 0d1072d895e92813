//! Directory and file creation helpers.

use crate::error::{ConfigError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Ensure a single directory exists.
///
/// No-op when `path` is already a directory. Fails with
/// [`ConfigError::PermissionDenied`] when the parent has no write bits at all or
/// the OS refuses the mkdir with `EACCES`/`EPERM`, and with
/// [`ConfigError::IoFailure`] carrying the system error text for anything else.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && is_read_only(parent)
    {
        return Err(ConfigError::PermissionDenied(path.to_path_buf()));
    }

    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|e| directory_error(path, e))
}

/// Ensure every directory along `path` exists, creating them left to right.
///
/// `/home/u/site` ensures `/home`, `/home/u`, then `/home/u/site`. Relative
/// paths are created relative to the process working directory.
pub fn ensure_path(path: &Path) -> Result<()> {
    let mut current = PathBuf::new();

    for component in path.components() {
        current.push(component);
        if let Component::Normal(_) = component {
            ensure_directory(&current)?;
        }
    }

    Ok(())
}

/// Expand a leading `~` to the home directory.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` forms
/// are left untouched.
pub fn expand_home(value: &str, home: &Path) -> String {
    if value == "~" {
        return home.to_string_lossy().into_owned();
    }

    match value.strip_prefix("~/") {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => value.to_string(),
    }
}

/// Create an empty file if none exists. Returns `true` when a file was created.
pub fn touch_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ConfigError::IoFailure(format!(
                "Failed to create file '{}': {}.",
                path.display(),
                e
            ))
        })?;

    debug!(path = %path.display(), "created empty config file");
    Ok(true)
}

/// Mode-bit check only; whether the current user may write is left to the
/// `PermissionDenied` error from `create_dir_all`.
fn is_read_only(dir: &Path) -> bool {
    fs::metadata(dir)
        .map(|meta| meta.is_dir() && meta.permissions().readonly())
        .unwrap_or(false)
}

fn directory_error(path: &Path, e: io::Error) -> ConfigError {
    match e.kind() {
        io::ErrorKind::PermissionDenied => ConfigError::PermissionDenied(path.to_path_buf()),
        _ => ConfigError::IoFailure(format!(
            "Failed to create directory '{}': {}.",
            path.display(),
            e
        )),
    }
}
