//! Read-only commands: `get`, `list`, and `path`.

use super::{existing_target, read_target};
use crate::cli::{GetArgs, ListArgs, OutputFormat, PathArgs};
use crate::config::{ConfigWriter, SerdeYamlCodec, YamlCodec, strip_document_start};
use crate::context::ConfigContext;
use crate::error::{ConfigError, Result};
use serde::Serialize;
use serde_yaml::Value;
use std::path::PathBuf;

pub(super) fn cmd_get(ctx: &ConfigContext, args: GetArgs) -> Result<()> {
    println!("{}", render_get(ctx, &args)?);
    Ok(())
}

pub(super) fn cmd_list(ctx: &ConfigContext, args: ListArgs) -> Result<()> {
    let output = render_list(ctx, &args)?;
    // Empty files print nothing rather than a blank line.
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}

pub(super) fn cmd_path(ctx: &ConfigContext, args: PathArgs) -> Result<()> {
    println!("{}", run_path(ctx, &args)?.display());
    Ok(())
}

pub(super) fn render_get(ctx: &ConfigContext, args: &GetArgs) -> Result<String> {
    let path = read_target(ctx, args.scope.scope)?;
    let mapping = ConfigWriter::new().load(&path)?;

    let value = mapping.get(&args.name).ok_or_else(|| {
        ConfigError::UserError(format!(
            "config '{}' is not set in '{}'",
            args.name,
            path.display()
        ))
    })?;

    render_value(value, args.format)
}

pub(super) fn render_list(ctx: &ConfigContext, args: &ListArgs) -> Result<String> {
    let path = read_target(ctx, args.scope.scope)?;
    let mapping = ConfigWriter::new().load(&path)?;

    match args.format {
        OutputFormat::Yaml => SerdeYamlCodec.encode(&mapping),
        OutputFormat::Json => to_json(mapping.as_mapping()),
    }
}

pub(super) fn run_path(ctx: &ConfigContext, args: &PathArgs) -> Result<PathBuf> {
    existing_target(ctx, args.scope.scope)
}

/// Scalars print bare in YAML mode; structured values print as a document.
fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    match (format, value) {
        (OutputFormat::Json, _) => to_json(value),
        (OutputFormat::Yaml, Value::String(s)) => Ok(s.clone()),
        (OutputFormat::Yaml, Value::Null) => Ok(String::new()),
        (OutputFormat::Yaml, other) => {
            let yaml = serde_yaml::to_string(other)
                .map_err(|e| ConfigError::EncodeFailure(e.to_string()))?;
            Ok(strip_document_start(&yaml).trim_end().to_string())
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ConfigError::EncodeFailure(e.to_string()))
}
