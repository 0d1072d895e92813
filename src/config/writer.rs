//! Read-modify-write of a single config file.
//!
//! The pure functions here ([`with_merge_directive`], [`combine_directive`],
//! [`apply_upsert`]) operate on in-memory mappings. [`ConfigWriter`] wraps them
//! with loading, the `path` key side effects, and atomic persistence.

use super::codec::{SerdeYamlCodec, YamlCodec};
use super::mapping::{ConfigMapping, MERGE_DIRECTIVE_KEY, MergeDirective};
use crate::error::{ConfigError, Result};
use crate::fs::{atomic_write_file, ensure_path, expand_home};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Key whose value is a filesystem path that must exist after the write.
pub const PATH_KEY: &str = "path";

/// Whether an upsert created a key or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

impl fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertOutcome::Added => f.write_str("Added"),
            UpsertOutcome::Updated => f.write_str("Updated"),
        }
    }
}

/// Options for [`ConfigWriter::upsert`].
#[derive(Debug, Clone, Default)]
pub struct UpsertOptions {
    /// Inject this merge directive before the upsert when set.
    pub merge: Option<MergeDirective>,
}

/// Result of a successful upsert, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertReport {
    pub outcome: UpsertOutcome,
    pub key: String,
}

/// Combine the directive's default block with whatever is already under `_`.
///
/// Defaults form the base and an existing mapping overrides them key by key.
/// An existing value that is not a mapping is kept as is.
pub fn combine_directive(defaults: &Mapping, existing: Option<&Value>) -> Value {
    match existing {
        None => Value::Mapping(defaults.clone()),
        Some(Value::Mapping(user)) => {
            let mut combined = defaults.clone();
            for (key, value) in user {
                combined.insert(key.clone(), value.clone());
            }
            Value::Mapping(combined)
        }
        Some(other) => other.clone(),
    }
}

/// Return `mapping` with the merge directive at the front.
///
/// Every other entry keeps its relative order.
pub fn with_merge_directive(mapping: ConfigMapping, directive: &MergeDirective) -> ConfigMapping {
    let combined = combine_directive(&directive.to_mapping(), mapping.get(MERGE_DIRECTIVE_KEY));

    let mut result = ConfigMapping::new();
    result.insert(MERGE_DIRECTIVE_KEY, combined);
    for (key, value) in mapping.iter() {
        if key.as_str() != Some(MERGE_DIRECTIVE_KEY) {
            result.insert_value(key.clone(), value.clone());
        }
    }
    result
}

/// Set `key` to `value`, classifying the change.
pub fn apply_upsert(mapping: &mut ConfigMapping, key: &str, value: Value) -> UpsertOutcome {
    match mapping.insert(key, value) {
        Some(_) => UpsertOutcome::Updated,
        None => UpsertOutcome::Added,
    }
}

/// Expand `~` in a `path` value and create every directory along it.
pub fn prepare_path_value(value: &str, home: &Path) -> Result<String> {
    let expanded = expand_home(value, home);
    ensure_path(Path::new(&expanded))?;
    Ok(expanded)
}

/// Loads, mutates, and persists config files through a [`YamlCodec`].
#[derive(Debug, Clone, Default)]
pub struct ConfigWriter<C = SerdeYamlCodec> {
    codec: C,
}

impl ConfigWriter<SerdeYamlCodec> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: YamlCodec> ConfigWriter<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Load the mapping at `path`; a missing or empty file is an empty mapping.
    pub fn load(&self, path: &Path) -> Result<ConfigMapping> {
        if !path.exists() {
            return Ok(ConfigMapping::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoFailure(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        self.codec.decode(&content).map_err(|e| match e {
            ConfigError::DecodeFailure(msg) => {
                ConfigError::DecodeFailure(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Serialize `mapping` and replace the file at `path` with it.
    pub fn save(&self, path: &Path, mapping: &ConfigMapping) -> Result<()> {
        let yaml = self.codec.encode(mapping)?;
        atomic_write_file(path, &yaml)?;
        info!(path = %path.display(), keys = mapping.len(), "wrote config file");
        Ok(())
    }

    /// Add or update `key` in the file at `path`.
    ///
    /// With `options.merge` set, the merge directive is injected first. A
    /// `path` key has `~` expanded against `home` and its directories created
    /// before it is stored.
    pub fn upsert(
        &self,
        path: &Path,
        key: &str,
        value: &str,
        options: &UpsertOptions,
        home: &Path,
    ) -> Result<UpsertReport> {
        if key.is_empty() {
            return Err(ConfigError::UserError(
                "config name must not be empty".to_string(),
            ));
        }

        let mut mapping = self.load(path)?;
        if let Some(directive) = &options.merge {
            mapping = with_merge_directive(mapping, directive);
        }

        let value = if key == PATH_KEY {
            prepare_path_value(value, home)?
        } else {
            value.to_string()
        };

        let outcome = apply_upsert(&mut mapping, key, Value::String(value));
        debug!(key, %outcome, "applying upsert");

        self.save(path, &mapping)?;

        Ok(UpsertReport {
            outcome,
            key: key.to_string(),
        })
    }

    /// Remove `key` from the file at `path`.
    pub fn delete(&self, path: &Path, key: &str) -> Result<Value> {
        let mut mapping = self.load(path)?;

        let removed = mapping.remove(key).ok_or_else(|| {
            ConfigError::UserError(format!(
                "config '{}' is not set in '{}'",
                key,
                path.display()
            ))
        })?;

        self.save(path, &mapping)?;
        Ok(removed)
    }
}
