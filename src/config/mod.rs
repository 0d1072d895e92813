//! Config file model, YAML codec, and the merge-aware writer.
//!
//! A config file is a flat YAML mapping of key to value, optionally carrying a
//! reserved `_` entry that tells a downstream consumer to merge the file with
//! a parent config.

mod codec;
mod mapping;
mod writer;


// Re-export public API
pub use codec::{SerdeYamlCodec, YamlCodec, strip_document_start};
pub use mapping::{ConfigMapping, MERGE_DIRECTIVE_KEY, MergeDirective};
pub use writer::{
    ConfigWriter, PATH_KEY, UpsertOptions, UpsertOutcome, UpsertReport, apply_upsert,
    combine_directive, prepare_path_value, with_merge_directive,
};
