//! Command implementations for cli-config.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the scope-to-file policy shared by all of them.

mod delete;
mod set;
mod show;


use crate::cli::Command;
use crate::context::ConfigContext;
use crate::error::{ConfigError, Result};
use crate::fs::touch_file;
use crate::scope::{Scope, resolve_config_path};
use std::path::PathBuf;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let ctx = ConfigContext::resolve()?;

    match command {
        Command::Set(args) => set::cmd_set(&ctx, args),
        Command::Get(args) => show::cmd_get(&ctx, args),
        Command::List(args) => show::cmd_list(&ctx, args),
        Command::Delete(args) => delete::cmd_delete(&ctx, args),
        Command::Path(args) => show::cmd_path(&ctx, args),
    }
}

/// File a write should go to.
///
/// Local scope falls back to a new empty file in the working directory when
/// the upward search finds nothing. Project scope never creates a file.
pub(crate) fn write_target(ctx: &ConfigContext, scope: Scope) -> Result<PathBuf> {
    if let Some(path) = resolve_config_path(scope, ctx) {
        return Ok(path);
    }

    match scope {
        Scope::Local => {
            let path = ctx.new_local_config_path();
            if touch_file(&path)? {
                debug!(path = %path.display(), "no local config found, created one");
            }
            Ok(path)
        }
        _ => Err(not_found(ctx, scope)),
    }
}

/// File a read should come from.
///
/// The global path is returned even when the file does not exist yet; callers
/// that need an existing file use [`existing_target`].
pub(crate) fn read_target(ctx: &ConfigContext, scope: Scope) -> Result<PathBuf> {
    resolve_config_path(scope, ctx).ok_or_else(|| not_found(ctx, scope))
}

/// Like [`read_target`], but the file must exist for every scope.
pub(crate) fn existing_target(ctx: &ConfigContext, scope: Scope) -> Result<PathBuf> {
    let path = read_target(ctx, scope)?;
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::NotFound(format!(
            "No {} config file at '{}'.",
            scope,
            path.display()
        )))
    }
}

fn not_found(ctx: &ConfigContext, scope: Scope) -> ConfigError {
    let file_name = match scope {
        Scope::Local => &ctx.layout.local_file,
        _ => &ctx.layout.project_file,
    };

    ConfigError::NotFound(format!(
        "No {} config found: '{}' does not exist in '{}' or its parent directories \
         within the current installation.",
        scope,
        file_name,
        ctx.cwd.display()
    ))
}
