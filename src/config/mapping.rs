//! The in-memory config mapping and the reserved merge directive.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Reserved top-level key holding the merge directive.
pub const MERGE_DIRECTIVE_KEY: &str = "_";

/// Flat key/value mapping persisted as a YAML file.
///
/// Keys are unique. Insertion order is preserved, so unrelated keys keep their
/// on-disk order across a rewrite and new keys are appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMapping(Mapping);

impl ConfigMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.find_key(key).and_then(|existing| self.0.get(existing))
    }

    /// Set `key` to `value`, returning the previous value if any.
    ///
    /// An existing key keeps its position, even when YAML read it as a number,
    /// boolean, or null; a new key is appended as a string.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        let existing = self
            .find_key(key)
            .cloned()
            .unwrap_or_else(|| Value::String(key.to_string()));
        self.0.insert(existing, value)
    }

    /// Set an entry whose key is an arbitrary YAML value.
    pub fn insert_value(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let existing = self.find_key(key)?.clone();
        self.0.shift_remove(&existing)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// The stored key whose text form is `key`.
    fn find_key(&self, key: &str) -> Option<&Value> {
        self.0
            .keys()
            .find(|existing| key_text(existing).as_deref() == Some(key))
    }
}

/// How a scalar key reads on the command line; `None` for structured keys.
fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

impl From<Mapping> for ConfigMapping {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

/// Instruction for a downstream consumer to merge this file with a parent file.
///
/// Serialized as `_: {merge: true, inherit: <parent>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDirective {
    pub inherit: String,
}

impl MergeDirective {
    pub fn new(inherit: impl Into<String>) -> Self {
        Self {
            inherit: inherit.into(),
        }
    }

    /// The directive's default block.
    pub fn to_mapping(&self) -> Mapping {
        let mut block = Mapping::new();
        block.insert(Value::from("merge"), Value::Bool(true));
        block.insert(Value::from("inherit"), Value::from(self.inherit.as_str()));
        block
    }
}
