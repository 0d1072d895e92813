//! YAML encode/decode behind a small trait, so mapping logic can be exercised
//! without touching disk or a particular YAML library.

use super::mapping::ConfigMapping;
use crate::error::{ConfigError, Result};
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

/// Leading document-start marker. Config files on disk never carry one.
static DOCUMENT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n").expect("document start pattern is valid")
});

/// Decode/encode capability for config files.
pub trait YamlCodec {
    /// Parse file content into a mapping. Empty content is an empty mapping.
    fn decode(&self, text: &str) -> Result<ConfigMapping>;

    /// Serialize a mapping to file content.
    fn encode(&self, mapping: &ConfigMapping) -> Result<String>;
}

/// [`YamlCodec`] backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeYamlCodec;

impl YamlCodec for SerdeYamlCodec {
    fn decode(&self, text: &str) -> Result<ConfigMapping> {
        if text.trim().is_empty() {
            return Ok(ConfigMapping::new());
        }

        let value: Value =
            serde_yaml::from_str(text).map_err(|e| ConfigError::DecodeFailure(e.to_string()))?;

        match value {
            Value::Null => Ok(ConfigMapping::new()),
            Value::Mapping(mapping) => Ok(mapping.into()),
            other => Err(ConfigError::DecodeFailure(format!(
                "expected a mapping at the top level, found {}",
                describe(&other)
            ))),
        }
    }

    fn encode(&self, mapping: &ConfigMapping) -> Result<String> {
        if mapping.is_empty() {
            return Ok(String::new());
        }

        let yaml = serde_yaml::to_string(mapping.as_mapping())
            .map_err(|e| ConfigError::EncodeFailure(e.to_string()))?;

        Ok(strip_document_start(&yaml).into_owned())
    }
}

/// Remove a leading `---` line if present.
pub fn strip_document_start(yaml: &str) -> std::borrow::Cow<'_, str> {
    DOCUMENT_START.replace(yaml, "")
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
