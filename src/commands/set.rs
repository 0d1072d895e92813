//! `set`: add or update one key.

use super::write_target;
use crate::cli::SetArgs;
use crate::config::{ConfigWriter, MergeDirective, UpsertOptions, UpsertReport};
use crate::context::ConfigContext;
use crate::error::Result;
use tracing::debug;

pub(super) fn cmd_set(ctx: &ConfigContext, args: SetArgs) -> Result<()> {
    let report = run_set(ctx, &args)?;
    println!("Success: {} '{}' config.", report.outcome, report.key);
    Ok(())
}

pub(super) fn run_set(ctx: &ConfigContext, args: &SetArgs) -> Result<UpsertReport> {
    let scope = args.scope.scope;
    debug!(%scope, "config type");

    let path = write_target(ctx, scope)?;
    let options = UpsertOptions {
        merge: merge_directive(ctx, args.local_merge.as_deref()),
    };

    ConfigWriter::new().upsert(&path, &args.name, &args.value, &options, &ctx.home)
}

/// `--local-merge` with no value inherits from the project config file.
fn merge_directive(ctx: &ConfigContext, local_merge: Option<&str>) -> Option<MergeDirective> {
    local_merge.map(|inherit| match inherit {
        "" => MergeDirective::new(ctx.layout.project_file.as_str()),
        other => MergeDirective::new(other),
    })
}
