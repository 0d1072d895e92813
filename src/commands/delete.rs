//! `delete`: remove one key.

use super::existing_target;
use crate::cli::DeleteArgs;
use crate::config::ConfigWriter;
use crate::context::ConfigContext;
use crate::error::Result;
use std::path::PathBuf;

pub(super) fn cmd_delete(ctx: &ConfigContext, args: DeleteArgs) -> Result<()> {
    run_delete(ctx, &args)?;
    println!("Success: Deleted '{}' config.", args.name);
    Ok(())
}

pub(super) fn run_delete(ctx: &ConfigContext, args: &DeleteArgs) -> Result<PathBuf> {
    let path = existing_target(ctx, args.scope.scope)?;
    ConfigWriter::new().delete(&path, &args.name)?;
    Ok(path)
}
