//! Upward config discovery.

use super::Scope;
use crate::context::ConfigContext;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Search `start` and its ancestors for the first of `targets`.
///
/// Each directory is checked for `boundary_marker` before it is checked for
/// targets. The first marker is the current installation's root; the second
/// means the walk has entered an outer installation, so the search stops there
/// and reports nothing even if a target exists further up.
pub fn find_file_upward(start: &Path, targets: &[&str], boundary_marker: &str) -> Option<PathBuf> {
    let mut markers_seen = 0usize;

    for dir in start.ancestors() {
        if dir.join(boundary_marker).is_file() {
            markers_seen += 1;
            if markers_seen > 1 {
                debug!(
                    dir = %dir.display(),
                    marker = boundary_marker,
                    "left the current installation, stopping search"
                );
                return None;
            }
        }

        for target in targets {
            let candidate = dir.join(target);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    None
}

/// Map a scope to its config file path.
///
/// Global always yields its fixed path, whether or not the file exists.
/// Project and Local yield an existing file or `None`.
pub fn resolve_config_path(scope: Scope, ctx: &ConfigContext) -> Option<PathBuf> {
    let layout = &ctx.layout;

    let resolved = match scope {
        Scope::Global => Some(ctx.global_config_path()),
        Scope::Project => find_file_upward(
            &ctx.cwd,
            &[layout.project_file.as_str()],
            &layout.boundary_marker,
        ),
        Scope::Local => find_file_upward(
            &ctx.cwd,
            &[layout.local_file.as_str()],
            &layout.boundary_marker,
        ),
    };

    match &resolved {
        Some(path) => debug!(%scope, path = %path.display(), "using config file"),
        None => debug!(%scope, cwd = %ctx.cwd.display(), "no config file found"),
    }

    resolved
}
