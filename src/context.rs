//! Environment resolution for cli-config.
//!
//! Every command starts by resolving a [`ConfigContext`]: the working
//! directory the upward search starts from, the home directory used for the
//! global file and `~` expansion, and the [`ConfigLayout`] naming the files
//! involved. Nothing downstream reads process-global state.

use crate::error::{ConfigError, Result};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the global config file location.
pub const GLOBAL_CONFIG_ENV: &str = "WP_CLI_CONFIG_PATH";

/// Default global config directory, relative to the home directory.
pub const DEFAULT_GLOBAL_DIR: &str = ".wp-cli";

/// Default global config file name inside [`DEFAULT_GLOBAL_DIR`].
pub const DEFAULT_GLOBAL_FILE: &str = "config.yml";

/// Default project-level config file name.
pub const DEFAULT_PROJECT_FILE: &str = "wp-cli.yml";

/// Default local-override config file name.
pub const DEFAULT_LOCAL_FILE: &str = "wp-cli.local.yml";

/// File whose presence marks the root of an installation.
pub const DEFAULT_BOUNDARY_MARKER: &str = "wp-load.php";

/// File names the resolver and writer work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayout {
    pub global_dir: String,
    pub global_file: String,
    pub project_file: String,
    pub local_file: String,
    pub boundary_marker: String,
}

impl Default for ConfigLayout {
    fn default() -> Self {
        Self {
            global_dir: DEFAULT_GLOBAL_DIR.to_string(),
            global_file: DEFAULT_GLOBAL_FILE.to_string(),
            project_file: DEFAULT_PROJECT_FILE.to_string(),
            local_file: DEFAULT_LOCAL_FILE.to_string(),
            boundary_marker: DEFAULT_BOUNDARY_MARKER.to_string(),
        }
    }
}

/// Resolved environment for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    /// Directory the upward search starts from.
    pub cwd: PathBuf,

    /// User home directory.
    pub home: PathBuf,

    /// Explicit global config path (from [`GLOBAL_CONFIG_ENV`]).
    pub global_override: Option<PathBuf>,

    pub layout: ConfigLayout,
}

impl ConfigContext {
    /// Resolve the context from the process environment.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigContext)` - Successfully resolved context
    /// * `Err(ConfigError::UserError)` - Working or home directory unavailable
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ConfigError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let home = dirs::home_dir().ok_or_else(|| {
            ConfigError::UserError("could not determine the home directory".to_string())
        })?;

        Ok(Self::resolve_with(cwd, home, env::var_os(GLOBAL_CONFIG_ENV)))
    }

    /// Build a context from explicit directories with no global override.
    ///
    /// This is useful for testing or when the directories are already known.
    pub fn resolve_from<P: AsRef<Path>, H: AsRef<Path>>(cwd: P, home: H) -> Self {
        Self::resolve_with(cwd.as_ref().to_path_buf(), home.as_ref().to_path_buf(), None)
    }

    fn resolve_with(cwd: PathBuf, home: PathBuf, global_override: Option<OsString>) -> Self {
        let global_override = global_override
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            cwd,
            home,
            global_override,
            layout: ConfigLayout::default(),
        }
    }

    /// Replace the file layout.
    pub fn with_layout(mut self, layout: ConfigLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Path of the global config file.
    pub fn global_config_path(&self) -> PathBuf {
        match &self.global_override {
            Some(path) => path.clone(),
            None => self
                .home
                .join(&self.layout.global_dir)
                .join(&self.layout.global_file),
        }
    }

    /// Where a new local config file is created when none is found upward.
    pub fn new_local_config_path(&self) -> PathBuf {
        self.cwd.join(&self.layout.local_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvVarGuard;
    use serial_test::serial;

    #[test]
    fn test_default_layout() {
        let layout = ConfigLayout::default();

        assert_eq!(layout.global_dir, ".wp-cli");
        assert_eq!(layout.global_file, "config.yml");
        assert_eq!(layout.project_file, "wp-cli.yml");
        assert_eq!(layout.local_file, "wp-cli.local.yml");
        assert_eq!(layout.boundary_marker, "wp-load.php");
    }

    #[test]
    fn test_global_config_path_under_home() {
        let ctx = ConfigContext::resolve_from("/srv/site", "/home/u");

        assert_eq!(
            ctx.global_config_path(),
            PathBuf::from("/home/u/.wp-cli/config.yml")
        );
    }

    #[test]
    fn test_global_override_wins() {
        let ctx = ConfigContext::resolve_with(
            PathBuf::from("/srv/site"),
            PathBuf::from("/home/u"),
            Some(OsString::from("/etc/wp-cli/config.yml")),
        );

        assert_eq!(
            ctx.global_config_path(),
            PathBuf::from("/etc/wp-cli/config.yml")
        );
    }

    #[test]
    fn test_empty_global_override_is_ignored() {
        let ctx = ConfigContext::resolve_with(
            PathBuf::from("/srv/site"),
            PathBuf::from("/home/u"),
            Some(OsString::new()),
        );

        assert!(ctx.global_override.is_none());
    }

    #[test]
    fn test_custom_layout() {
        let layout = ConfigLayout {
            global_dir: ".tool".to_string(),
            global_file: "settings.yml".to_string(),
            project_file: "tool.yml".to_string(),
            local_file: "tool.local.yml".to_string(),
            boundary_marker: "tool.root".to_string(),
        };
        let ctx = ConfigContext::resolve_from("/work/app", "/home/u").with_layout(layout);

        assert_eq!(
            ctx.global_config_path(),
            PathBuf::from("/home/u/.tool/settings.yml")
        );
        assert_eq!(
            ctx.new_local_config_path(),
            PathBuf::from("/work/app/tool.local.yml")
        );
    }

    #[test]
    #[serial]
    fn test_resolve_reads_global_override_from_env() {
        let _guard = EnvVarGuard::set(GLOBAL_CONFIG_ENV, "/tmp/override/config.yml");

        let ctx = ConfigContext::resolve().unwrap();

        assert_eq!(
            ctx.global_config_path(),
            PathBuf::from("/tmp/override/config.yml")
        );
        assert!(ctx.cwd.is_absolute());
    }
}
