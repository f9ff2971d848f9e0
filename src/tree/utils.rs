//! Shared utility functions for tree walking

use std::io;
use std::path::{Component, Path, PathBuf};

/// Prepended once per depth level to every output line.
pub const INDENT_TOKEN: &str = "│   ";

/// Build the indentation for a line at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT_TOKEN.repeat(depth)
}

/// Get the display name of a directory: its final component, or the whole
/// path when it has none (e.g. `/` or a path ending in `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Make `path` absolute against the current directory and drop `.` and
/// `..` parts, so the root is shown by its own name.
///
/// `..` is resolved lexically; symlinks in the path are left alone.
pub fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
