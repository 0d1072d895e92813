use crate::context::{ConfigContext, DEFAULT_BOUNDARY_MARKER};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets an environment variable for the guard's lifetime, restoring the
/// previous value on drop.
pub(crate) struct EnvVarGuard {
    key: &'static str,
    original: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        // The environment is process-global. Lock it so tests don't race even
        // if a #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::var_os(key);
        // SAFETY: ENV_LOCK serializes every environment mutation in tests.
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            original,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: still holding ENV_LOCK.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// A throwaway directory tree with a fake home inside it.
///
/// The tree sits one level below the temp dir, and both carry a boundary
/// marker. Any upward search that gets past the tree's own files sees two
/// markers and stops before reaching the real filesystem.
pub(crate) struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("home")).unwrap();
        fs::write(dir.path().join(DEFAULT_BOUNDARY_MARKER), "").unwrap();
        fs::write(root.join(DEFAULT_BOUNDARY_MARKER), "").unwrap();
        Self { _dir: dir, root }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    /// Create a directory (and parents) relative to the root.
    pub(crate) fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file relative to the root, creating parent directories.
    pub(crate) fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub(crate) fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).unwrap()
    }

    /// Context whose working directory is `rel` under the root.
    pub(crate) fn context_at(&self, rel: &str) -> ConfigContext {
        let cwd = self.mkdir(rel);
        ConfigContext::resolve_from(cwd, self.home())
    }
}
