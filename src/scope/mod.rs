//! Config scopes and the resolver mapping a scope to a file path.
//!
//! - `global` is a fixed file under the home directory.
//! - `project` and `local` are found by walking upward from the working
//!   directory, stopping once the walk leaves the current installation.

mod resolver;

#[cfg(test)]
mod tests;

use clap::ValueEnum;
use std::fmt;

pub use resolver::{find_file_upward, resolve_config_path};

/// Which configuration file a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Scope {
    /// Per-user file under the home directory.
    #[default]
    Global,
    /// Project-level file, found by upward search.
    Project,
    /// Local-override file, found by upward search.
    Local,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Project => "project",
            Scope::Local => "local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
