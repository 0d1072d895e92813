//! Filesystem utilities for cli-config.
//!
//! Atomic writes keep a config file from ever being observed half-written;
//! the directory helpers back the `path` key and local-file creation.

pub mod atomic;
mod ensure;

pub use atomic::atomic_write_file;
pub use ensure::{ensure_directory, ensure_path, expand_home, touch_file};
